pub mod field_extractor;
pub mod question_ctx;
pub mod question_flow;

pub use field_extractor::{ExtractState, FieldExtractor};
pub use question_ctx::QuestionCtx;
pub use question_flow::{ProcessResult, QuestionFlow, RejectReason};
