//! 字段提取状态机
//!
//! 逐行消费一个题块，把题干、选项、答案、解析填进 `DraftQuestion`。
//!
//! ```text
//!  首行(去编号) ──► InQuestion ──Option──► InOptions
//!                    │   ▲ Plain: 追加题干
//!       Answer ──► InAnswer        Explanation ──► InExplanation
//!                    Plain: 丢弃                     Plain: 追加解析
//! ```
//!
//! 任意状态遇到 Option / Answer / Explanation 行都会切换到对应状态；
//! 在 InOptions 与 InAnswer 中的普通行会被丢弃。

use crate::models::{DraftQuestion, QuestionBlock};
use crate::services::line_classifier::{classify_line, LineKind};
use regex::Regex;
use std::sync::LazyLock;

static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid regex"));

/// 提取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractState {
    InQuestion,
    InOptions,
    InAnswer,
    InExplanation,
}

/// 字段提取器，只属于一个题块的提取过程
#[derive(Debug)]
pub struct FieldExtractor {
    state: ExtractState,
    draft: DraftQuestion,
}

impl FieldExtractor {
    /// 用题块首行初始化：去掉开头的 `12. ` 编号，剩余部分作为题干
    pub fn start(ordinal: usize, first_line: &str) -> Self {
        let question_text = NUMBER_PREFIX_RE.replace(first_line, "").into_owned();
        Self {
            state: ExtractState::InQuestion,
            draft: DraftQuestion {
                ordinal,
                question_text,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> ExtractState {
        self.state
    }

    /// 消费下一行
    pub fn feed(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Option => {
                self.draft.options.push(line.to_string());
                self.state = ExtractState::InOptions;
            }
            LineKind::Answer(payload) => {
                self.draft.answer_letter = payload.trim().to_uppercase();
                self.state = ExtractState::InAnswer;
            }
            LineKind::Explanation(payload) => {
                self.draft.explanation = Some(payload.trim().to_string());
                self.state = ExtractState::InExplanation;
            }
            LineKind::Plain => match self.state {
                ExtractState::InQuestion => {
                    self.draft.question_text.push(' ');
                    self.draft.question_text.push_str(line);
                }
                ExtractState::InExplanation => {
                    if let Some(explanation) = self.draft.explanation.as_mut() {
                        explanation.push(' ');
                        explanation.push_str(line);
                    }
                }
                // 选项和答案不支持续行
                ExtractState::InOptions | ExtractState::InAnswer => {}
            },
        }
    }

    pub fn finish(self) -> DraftQuestion {
        self.draft
    }
}

/// 对整个题块执行字段提取
///
/// 空题块返回 `None`。
pub fn extract(block: &QuestionBlock) -> Option<DraftQuestion> {
    let (first, rest) = block.lines.split_first()?;
    let mut extractor = FieldExtractor::start(block.ordinal, first);
    for line in rest {
        extractor.feed(line);
    }
    Some(extractor.finish())
}
