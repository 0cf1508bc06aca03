//! 答案解析 - 业务能力层
//!
//! 把答案字母换算成对应选项的文本

use regex::Regex;
use std::sync::LazyLock;

static OPTION_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\)\s*").expect("valid regex"));

/// 去掉选项开头的 `X) ` 前缀
pub fn strip_option_prefix(option: &str) -> &str {
    match OPTION_PREFIX_RE.find(option) {
        Some(m) => option[m.end()..].trim(),
        None => option.trim(),
    }
}

/// 根据答案字母取出正确选项的文本
///
/// 字母按 `A` 为 0 计算下标；字母缺失或超出选项范围时返回空字符串，不视为错误。
pub fn resolve_answer(answer_letter: &str, options: &[String]) -> String {
    let Some(letter) = answer_letter.chars().next() else {
        return String::new();
    };
    let letter = letter.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return String::new();
    }

    let index = (letter as u8 - b'A') as usize;
    options
        .get(index)
        .map(|option| strip_option_prefix(option).to_string())
        .unwrap_or_default()
}
