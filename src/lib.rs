//! # Quiz Convert
//!
//! 把 Word 导出的松散题目文本转换成结构化的选择题目录（科目 → 课时 → 题目）
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 只负责输入输出，不关心题目内容
//! - `DocumentSource` - 原始文本的来源（目录 / 内存）
//! - `SubjectSink` - 转换结果的去处（JSON 目录 / 内存）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，都是纯函数
//! - 文本清理、分段、行分类、答案解析、选项修复、文档组装
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个题块"的完整处理流程
//! - `FieldExtractor` - 字段提取状态机
//! - `QuestionFlow` - 行数检查 → 提取 → 选项检查 → 答案解析
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发与失败隔离
//! - `orchestrator/document_processor` - 单个文档处理器，遍历题块列表
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentSource, FolderSource, InMemorySource, JsonFolderSink, SubjectSink};
pub use models::{
    Category, ConversionSummary, Difficulty, LessonRecord, ParsedQuestion, RawDocument,
    SubjectRecord,
};
pub use orchestrator::{process_document, App, BatchOutcome, BatchProcessor};
pub use workflow::{ProcessResult, QuestionCtx, QuestionFlow};
