//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 从 `DocumentSource` 列出并读取文档
//! - 控制并发数量（Semaphore）
//! - 隔离单个文档的失败，汇总 `ConversionSummary`
//! - 把结果交给 `SubjectSink`
//!
//! ### `document_processor` - 单个文档处理器
//! - 清理、分段（Vec<QuestionBlock>）
//! - 创建并复用 QuestionFlow
//! - 组装科目记录
//! - 输出单个文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<RawDocument>)
//!     ↓
//! document_processor (处理 Vec<QuestionBlock>)
//!     ↓
//! workflow::QuestionFlow (处理单个题块)
//!     ↓
//! services (能力层：分类 / 分段 / 答案 / 组装)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{convert_one, App, BatchOutcome, BatchProcessor, DocumentFailure};
pub use document_processor::{process_document, DocumentConversion, DocumentStats};
