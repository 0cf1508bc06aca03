//! 文本清理 - 业务能力层
//!
//! 处理从 Word 等文档导出时带出的不可见字符和换行差异

/// 清理原始文本
///
/// 1. `\r\n` / `\r` 统一为 `\n`
/// 2. 不换行空格、制表符替换为普通空格
/// 3. 删除 BOM 与零宽字符
pub fn clean_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified
        .chars()
        .filter_map(|c| match c {
            '\u{00A0}' | '\t' => Some(' '),
            '\u{FEFF}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_windows_export() {
        let raw = "\u{FEFF}1.\u{00A0}What?\r\nA)\t3\rB) 4\u{200B}";
        assert_eq!(clean_text(raw), "1. What?\nA) 3\nB) 4");
    }

    #[test]
    fn test_clean_plain_text_unchanged() {
        let raw = "1. What is 2+2?\nA) 3\nB) 4";
        assert_eq!(clean_text(raw), raw);
    }
}
