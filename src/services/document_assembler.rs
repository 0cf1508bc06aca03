//! 文档组装 - 业务能力层
//!
//! 把一个文档里通过校验的题目组装成一个科目（内含唯一的课时）

use crate::error::{AppError, AppResult};
use crate::models::{Category, LessonRecord, ParsedQuestion, SubjectRecord};

/// 科目记录的创建者
pub const CREATED_BY: &str = "admin";

/// 通过校验的题目，附带它所在题块的序号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedQuestion {
    pub ordinal: usize,
    pub question: ParsedQuestion,
}

/// 题目 ID，取自题块在全文中的序号（被丢弃的题块也占号）
pub fn question_id(ordinal: usize) -> String {
    format!("q{}", ordinal)
}

/// 把 `-` 和 `_` 替换为空格
pub fn spaced_identifier(identifier: &str) -> String {
    identifier.replace(['-', '_'], " ")
}

/// 每个单词首字母大写，其余字符不变
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// 生成用于 ID 和文件名的 slug
pub fn slugify(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// 组装科目记录
///
/// 没有任何题目时返回 `ConversionError::NoAcceptedQuestions`，不会生成空科目。
pub fn assemble_subject(
    identifier: &str,
    accepted: Vec<AcceptedQuestion>,
    total_blocks: usize,
) -> AppResult<SubjectRecord> {
    if accepted.is_empty() {
        return Err(AppError::no_accepted_questions(identifier, total_blocks));
    }

    let spaced = spaced_identifier(identifier);
    let name = capitalize_words(&spaced);
    let description = format!("Practice questions for {}", spaced);

    let questions = accepted
        .into_iter()
        .map(|AcceptedQuestion { ordinal, mut question }| {
            question.id = question_id(ordinal);
            question
        })
        .collect();

    let lesson = LessonRecord {
        id: format!("{}-lesson-1", slugify(identifier)),
        title: format!("{} Practice Questions", name),
        description: description.clone(),
        content: String::new(),
        order: 0,
        questions,
    };

    Ok(SubjectRecord {
        name,
        category: Category::classify(identifier),
        description,
        created_by: CREATED_BY.to_string(),
        lessons: vec![lesson],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn accepted(ordinal: usize, text: &str) -> AcceptedQuestion {
        AcceptedQuestion {
            ordinal,
            question: ParsedQuestion {
                id: String::new(),
                question: text.to_string(),
                options: vec!["A) x".to_string(), "B) y".to_string()],
                answer: "x".to_string(),
                correct_option: "A".to_string(),
                explanation: None,
                difficulty: Difficulty::Medium,
            },
        }
    }

    #[test]
    fn test_assemble_subject_fields() {
        let subject = assemble_subject(
            "quantitative_aptitude-set-1",
            vec![accepted(1, "one"), accepted(4, "four")],
            5,
        )
        .unwrap();

        assert_eq!(subject.name, "Quantitative Aptitude Set 1");
        assert_eq!(subject.description, "Practice questions for quantitative aptitude set 1");
        assert_eq!(subject.category, Category::QuantitativeAptitude);
        assert_eq!(subject.created_by, "admin");
        assert_eq!(subject.lessons.len(), 1);

        let lesson = &subject.lessons[0];
        assert_eq!(lesson.title, "Quantitative Aptitude Set 1 Practice Questions");
        assert_eq!(lesson.order, 0);
        assert_eq!(lesson.content, "");
        assert_eq!(lesson.id, "quantitative-aptitude-set-1-lesson-1");

        // ID 保留原题块序号，不重新编号
        let ids: Vec<&str> = lesson.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q4"]);
    }

    #[test]
    fn test_assemble_without_questions_fails() {
        let err = assemble_subject("Misc_Trivia", Vec::new(), 3).unwrap_err();
        assert!(err.is_nothing_to_convert());
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("misc trivia"), "Misc Trivia");
        assert_eq!(capitalize_words("already Upper"), "Already Upper");
        assert_eq!(capitalize_words("double  space"), "Double  Space");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Misc_Trivia"), "misc-trivia");
        assert_eq!(slugify("  GK -- Set 2 "), "gk-set-2");
    }
}
