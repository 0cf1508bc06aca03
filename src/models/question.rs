use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 原始文档（一次转换的输入，只读）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// 文档标识，通常是文件名（不含扩展名）
    pub source_id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(source_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            text: text.into(),
        }
    }
}

/// 题块：分段后一段连续的非空行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    /// 在全部题块中的序号（从1开始，包含被丢弃的题块）
    pub ordinal: usize,
    pub lines: Vec<String>,
}

/// 题目草稿，由字段提取状态机逐行填充
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftQuestion {
    pub ordinal: usize,
    pub question_text: String,
    /// 选项，保留 "A) " 前缀
    pub options: Vec<String>,
    /// 大写的答案字母，未出现答案行时为空
    pub answer_letter: String,
    pub explanation: Option<String>,
}

/// 题目难度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("未知难度: {}", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 校验通过的最终题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    pub id: String,
    pub question: String,
    /// 至少两个选项
    pub options: Vec<String>,
    /// 正确选项的文本（去掉字母前缀），无法解析答案时为空
    pub answer: String,
    /// 原始答案字母
    pub correct_option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl ParsedQuestion {
    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_question_json_shape() {
        let question = ParsedQuestion {
            id: "q1".to_string(),
            question: "What is 2+2?".to_string(),
            options: vec!["A) 3".to_string(), "B) 4".to_string()],
            answer: "4".to_string(),
            correct_option: "B".to_string(),
            explanation: None,
            difficulty: Difficulty::default(),
        };

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["correctOption"], "B");
        assert_eq!(value["difficulty"], "medium");
        assert!(value.get("explanation").is_none());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("extreme".parse::<Difficulty>().is_err());
    }
}
