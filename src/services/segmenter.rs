//! 分段 - 业务能力层
//!
//! 把整篇文本切成题块。以 `12.` 这类数字编号开头的行开始一个新题块。

use crate::models::QuestionBlock;
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("valid regex"));

/// 文本中所有去掉首尾空白后的非空行
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// 判断一行是否为题块起始行
pub fn is_block_start(line: &str) -> bool {
    BLOCK_START_RE.is_match(line)
}

/// 切分题块
///
/// 第一个编号行之前的内容（如果有）单独成为第 1 个题块。
/// 所有题块的行依次拼接后与原文的非空行完全一致。
pub fn segment(text: &str) -> Vec<QuestionBlock> {
    let mut blocks: Vec<QuestionBlock> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in non_empty_lines(text) {
        if is_block_start(line) && !current.is_empty() {
            blocks.push(QuestionBlock {
                ordinal: blocks.len() + 1,
                lines: std::mem::take(&mut current),
            });
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        blocks.push(QuestionBlock {
            ordinal: blocks.len() + 1,
            lines: current,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_numbered_blocks() {
        let text = "1. First?\nA) x\nB) y\n\n  2. Second?\nA) p\nB) q\n";
        let blocks = segment(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].ordinal, 1);
        assert_eq!(blocks[0].lines, vec!["1. First?", "A) x", "B) y"]);
        assert_eq!(blocks[1].ordinal, 2);
        assert_eq!(blocks[1].lines[0], "2. Second?");
    }

    #[test]
    fn test_preamble_becomes_first_block() {
        let text = "Chapter 4 quiz\nRead carefully\n1. Q?\nA) a\nB) b";
        let blocks = segment(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["Chapter 4 quiz", "Read carefully"]);
        assert_eq!(blocks[1].ordinal, 2);
    }

    #[test]
    fn test_segment_empty_text() {
        assert!(segment("").is_empty());
        assert!(segment("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_segment_is_lossless() {
        let text = "intro\n1. a\nA) b\n\n2. c\n3. d\nExplanation: e";
        let rejoined: Vec<String> = segment(text).into_iter().flat_map(|b| b.lines).collect();
        let expected: Vec<&str> = non_empty_lines(text).collect();
        assert_eq!(rejoined, expected);
    }
}
