//! 题块处理流程 - 流程层
//!
//! 核心职责：定义"一个题块"的完整处理流程
//!
//! 流程顺序：
//! 1. 行数检查（少于 3 行直接丢弃）
//! 2. 字段提取
//! 3. 选项数检查（少于 2 个丢弃）
//! 4. 答案解析 → 生成 ParsedQuestion

use tracing::{debug, info};

use crate::config::Config;
use crate::models::{Difficulty, ParsedQuestion, QuestionBlock};
use crate::services::answer_resolver::resolve_answer;
use crate::services::document_assembler::AcceptedQuestion;
use crate::utils::logging::truncate_text;
use crate::workflow::field_extractor;
use crate::workflow::question_ctx::QuestionCtx;

/// 题块至少需要的非空行数
pub const MIN_BLOCK_LINES: usize = 3;
/// 题目至少需要的选项数
pub const MIN_OPTIONS: usize = 2;

/// 丢弃原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// 行数不足
    TooFewLines { lines: usize },
    /// 选项不足
    TooFewOptions { options: usize },
}

/// 题块处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 通过校验
    Accepted(AcceptedQuestion),
    /// 丢弃（正常的噪声，不是错误）
    Rejected(RejectReason),
}

/// 题块处理流程
///
/// - 只处理单个题块
/// - 不持有任何资源
/// - 丢弃决定是静默的，只在 verbose 模式下输出日志
pub struct QuestionFlow {
    difficulty: Difficulty,
    verbose_logging: bool,
}

impl QuestionFlow {
    /// 创建新的题块处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            difficulty: config.default_difficulty,
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn run(&self, block: &QuestionBlock, ctx: &QuestionCtx) -> ProcessResult {
        if block.lines.len() < MIN_BLOCK_LINES {
            let reason = RejectReason::TooFewLines {
                lines: block.lines.len(),
            };
            self.log_rejected(ctx, block, reason);
            return ProcessResult::Rejected(reason);
        }

        let Some(draft) = field_extractor::extract(block) else {
            let reason = RejectReason::TooFewLines { lines: 0 };
            self.log_rejected(ctx, block, reason);
            return ProcessResult::Rejected(reason);
        };

        if draft.options.len() < MIN_OPTIONS {
            let reason = RejectReason::TooFewOptions {
                options: draft.options.len(),
            };
            self.log_rejected(ctx, block, reason);
            return ProcessResult::Rejected(reason);
        }

        let answer = resolve_answer(&draft.answer_letter, &draft.options);
        if answer.is_empty() {
            debug!("{} 答案字母 '{}' 无法对应到选项", ctx, draft.answer_letter);
        }

        let explanation = draft
            .explanation
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        ProcessResult::Accepted(AcceptedQuestion {
            ordinal: draft.ordinal,
            question: ParsedQuestion {
                id: String::new(),
                question: draft.question_text.trim().to_string(),
                options: draft.options,
                answer,
                correct_option: draft.answer_letter,
                explanation,
                difficulty: self.difficulty,
            },
        })
    }

    /// verbose 模式下的丢弃日志内容，非 verbose 时为 None
    fn rejection_message(
        &self,
        ctx: &QuestionCtx,
        block: &QuestionBlock,
        reason: RejectReason,
    ) -> Option<String> {
        if !self.verbose_logging {
            return None;
        }
        let preview = block.lines.first().map(String::as_str).unwrap_or_default();
        Some(format!(
            "{} 丢弃题块 ({:?}): {}",
            ctx,
            reason,
            truncate_text(preview, 40)
        ))
    }

    fn log_rejected(&self, ctx: &QuestionCtx, block: &QuestionBlock, reason: RejectReason) {
        if let Some(message) = self.rejection_message(ctx, block, reason) {
            info!("{}", message);
        }
    }
}
