//! 题块处理上下文
//!
//! 封装"我正在处理哪个文档的第几个题块"这一信息

use std::fmt::Display;

/// 题块处理上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 文档标识
    pub source_id: String,

    /// 文档索引（仅用于日志显示）
    pub document_index: usize,

    /// 题块在文档中的序号（从1开始）
    pub ordinal: usize,
}

impl QuestionCtx {
    /// 创建新的题块上下文
    pub fn new(source_id: impl Into<String>, document_index: usize, ordinal: usize) -> Self {
        Self {
            source_id: source_id.into(),
            document_index,
            ordinal,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 {} ({}) 题块#{}]",
            self.document_index, self.source_id, self.ordinal
        )
    }
}
