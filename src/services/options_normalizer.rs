//! 选项修复 - 业务能力层
//!
//! 上传前修复一种常见的坏数据：所有选项被拼进了同一个字符串，用换行分隔。
//! 其他形状的选项原样保留，重复执行不会产生变化。

use crate::models::{ParsedQuestion, SubjectRecord};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static LETTER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Za-z]\)").expect("valid regex"));

/// 是否为需要修复的形状：只有一个选项且其中含有换行
pub fn needs_normalization(options: &[String]) -> bool {
    options.len() == 1 && options[0].contains('\n')
}

/// 修复选项列表
pub fn normalize_options(options: Vec<String>) -> Vec<String> {
    if !needs_normalization(&options) {
        return options;
    }

    options[0]
        .lines()
        .map(|piece| LETTER_PREFIX_RE.replace(piece, "").trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// 修复单道题目的选项，返回是否发生了修改
pub fn normalize_question(question: &mut ParsedQuestion) -> bool {
    if !needs_normalization(&question.options) {
        return false;
    }
    let options = std::mem::take(&mut question.options);
    question.options = normalize_options(options);
    debug!(
        "题目 {} 的选项已拆分为 {} 个",
        question.id,
        question.options.len()
    );
    true
}

/// 修复整个科目下所有题目的选项，返回被修复的题目数
pub fn normalize_subject(subject: &mut SubjectRecord) -> usize {
    subject
        .lessons
        .iter_mut()
        .flat_map(|lesson| lesson.questions.iter_mut())
        .map(normalize_question)
        .filter(|changed| *changed)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_concatenated_options() {
        let options = strings(&["A) Red\nB) Blue\nC) Green"]);
        assert_eq!(normalize_options(options), strings(&["Red", "Blue", "Green"]));
    }

    #[test]
    fn test_split_drops_empty_pieces() {
        let options = strings(&["A) Red\n\nB)\n  c) Green  \r\n"]);
        assert_eq!(normalize_options(options), strings(&["Red", "Green"]));
    }

    #[test]
    fn test_well_formed_options_untouched() {
        let options = strings(&["A) Red", "B) Blue"]);
        assert_eq!(normalize_options(options.clone()), options);

        let single = strings(&["A) Red"]);
        assert_eq!(normalize_options(single.clone()), single);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_options(strings(&["A) Red\nB) Blue"]));
        let twice = normalize_options(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_question_reports_change() {
        let mut question = ParsedQuestion {
            id: "q3".to_string(),
            question: "Pick a colour".to_string(),
            options: strings(&["A) Red\nB) Blue"]),
            answer: String::new(),
            correct_option: String::new(),
            explanation: None,
            difficulty: Difficulty::Medium,
        };

        assert!(normalize_question(&mut question));
        assert_eq!(question.options, strings(&["Red", "Blue"]));
        assert!(!normalize_question(&mut question));
    }
}
