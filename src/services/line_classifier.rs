//! 行分类 - 业务能力层
//!
//! 只负责判断"这一行是什么"，不关心当前处于哪个字段

use regex::Regex;
use std::sync::LazyLock;

static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-D]\)").expect("valid regex"));
static ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^answer:").expect("valid regex"));
static EXPLANATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^explanation:").expect("valid regex"));

/// 行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// 选项行，如 `B) 4`，内容为整行
    Option,
    /// 答案行，携带 `Answer:` 之后的内容
    Answer(&'a str),
    /// 解析行，携带 `Explanation:` 之后的内容
    Explanation(&'a str),
    /// 普通行，属于当前字段的续行
    Plain,
}

/// 对单行文本分类
///
/// 调用方保证 `line` 已去掉首尾空白且非空。规则按顺序匹配，先命中者生效。
pub fn classify_line(line: &str) -> LineKind<'_> {
    if OPTION_RE.is_match(line) {
        return LineKind::Option;
    }
    if let Some(m) = ANSWER_RE.find(line) {
        return LineKind::Answer(&line[m.end()..]);
    }
    if let Some(m) = EXPLANATION_RE.find(line) {
        return LineKind::Explanation(&line[m.end()..]);
    }
    LineKind::Plain
}
