//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责把一个文档转换成一个科目，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **清理与分段**：去掉导出噪声，切出 `Vec<QuestionBlock>`
//! 2. **流程调度**：创建并复用 `QuestionFlow`，逐个处理题块
//! 3. **组装**：把通过校验的题目交给文档组装器
//! 4. **统计输出**：记录通过/丢弃/未解析答案数量
//!
//! 所有中间结构都只属于本次转换，结束即丢弃。

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{RawDocument, SubjectRecord};
use crate::services::document_assembler::assemble_subject;
use crate::services::{clean_text, segment};
use crate::workflow::{ProcessResult, QuestionCtx, QuestionFlow, RejectReason};
use tracing::{debug, info};

/// 题块处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    /// 题块总数（含被丢弃的）
    pub blocks: usize,
    pub accepted: usize,
    /// 因行数不足被丢弃
    pub rejected_short: usize,
    /// 因选项不足被丢弃
    pub rejected_options: usize,
    /// 通过校验但答案为空
    pub unanswered: usize,
}

/// 单个文档的转换结果
#[derive(Debug, Clone)]
pub struct DocumentConversion {
    pub subject: SubjectRecord,
    pub stats: DocumentStats,
}

/// 处理单个文档
///
/// # 参数
/// - `document`: 原始文档
/// - `document_index`: 文档索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 没有任何可用题目时返回 `ConversionError::NoAcceptedQuestions`
pub fn process_document(
    document: &RawDocument,
    document_index: usize,
    config: &Config,
) -> AppResult<DocumentConversion> {
    let cleaned = clean_text(&document.text);
    let blocks = segment(&cleaned);

    log_document_start(document_index, &document.source_id, blocks.len());

    // 创建流程对象（只创建一次，复用）
    let question_flow = QuestionFlow::new(config);

    let mut stats = DocumentStats {
        blocks: blocks.len(),
        ..Default::default()
    };
    let mut accepted = Vec::new();

    for block in &blocks {
        let ctx = QuestionCtx::new(&document.source_id, document_index, block.ordinal);

        match question_flow.run(block, &ctx) {
            ProcessResult::Accepted(question) => {
                stats.accepted += 1;
                if !question.question.is_answered() {
                    stats.unanswered += 1;
                }
                accepted.push(question);
            }
            ProcessResult::Rejected(RejectReason::TooFewLines { .. }) => {
                stats.rejected_short += 1;
            }
            ProcessResult::Rejected(RejectReason::TooFewOptions { .. }) => {
                stats.rejected_options += 1;
            }
        }
    }

    log_document_complete(document_index, &stats);

    let subject = assemble_subject(&document.source_id, accepted, stats.blocks)?;
    debug!(
        "[文档 {}] 分类: {} | 科目: {}",
        document_index, subject.category, subject.name
    );

    Ok(DocumentConversion { subject, stats })
}

// ========== 日志辅助函数 ==========

fn log_document_start(document_index: usize, source_id: &str, block_count: usize) {
    info!("[文档 {}] 开始处理: {}", document_index, source_id);
    debug!("[文档 {}] 题块总数: {}", document_index, block_count);
}

fn log_document_complete(document_index: usize, stats: &DocumentStats) {
    info!(
        "[文档 {}] 题块统计: 通过 {}, 行数不足 {}, 选项不足 {}, 总计 {}",
        document_index, stats.accepted, stats.rejected_short, stats.rejected_options, stats.blocks
    );
    if stats.unanswered > 0 {
        info!(
            "[文档 {}] ⚠️ {} 道题的答案无法对应到选项",
            document_index, stats.unanswered
        );
    }
}
