//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的转换和结果汇总。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、输出启动信息
//! 2. **批量加载**：从 `DocumentSource` 列出所有待转换的文档
//! 3. **并发控制**：使用 Semaphore 限制并发数量，转换在阻塞线程池中执行
//! 4. **分批处理**：将文档分批次处理，每批完成后再开始下一批
//! 5. **失败隔离**：单个文档读取或转换失败只记录，不影响后续文档
//! 6. **全局统计**：汇总成 `ConversionSummary`，交给 `SubjectSink`
//!
//! ## 取消
//!
//! 取消标志只在文档边界检查；尚未开始的文档不计入 `documents_seen`。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{DocumentSource, FolderSource, JsonFolderSink, SubjectSink};
use crate::models::{ConversionSummary, SubjectRecord};
use crate::orchestrator::document_processor::{process_document, DocumentConversion};
use crate::utils::logging::{
    init_log_file, log_batch_complete, log_batch_start, log_documents_loaded, log_startup,
    print_final_stats,
};
use anyhow::{Context, Result};
use futures::future::join_all;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 转换失败的文档
#[derive(Debug)]
pub struct DocumentFailure {
    /// 文档索引（从1开始）
    pub index: usize,
    pub source_id: String,
    pub error: AppError,
}

/// 一次批量转换的结果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 成功转换的科目，保持输入顺序
    pub subjects: Vec<SubjectRecord>,
    pub summary: ConversionSummary,
    pub failures: Vec<DocumentFailure>,
}

impl BatchOutcome {
    /// 记录一个文档的转换结果
    fn record(&mut self, index: usize, source_id: String, result: AppResult<DocumentConversion>) {
        self.summary.documents_seen += 1;
        match result {
            Ok(conversion) => {
                self.summary.documents_converted += 1;
                self.summary.total_questions += conversion.stats.accepted;
                self.subjects.push(conversion.subject);
            }
            Err(e) => {
                if e.is_nothing_to_convert() {
                    warn!("[文档 {}] ⚠️ 没有可转换的题目: {}", index, source_id);
                } else {
                    error!("[文档 {}] ❌ 转换失败: {}", index, e);
                }
                self.failures.push(DocumentFailure {
                    index,
                    source_id,
                    error: e,
                });
            }
        }
    }
}

/// 读取并转换单个文档
pub fn convert_one(
    source: &dyn DocumentSource,
    source_id: &str,
    index: usize,
    config: &Config,
) -> AppResult<DocumentConversion> {
    let document = source.load(source_id)?;
    process_document(&document, index, config)
}

/// 顺序批量转换器
pub struct BatchProcessor {
    config: Config,
    cancel: Arc<AtomicBool>,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 取消标志，置为 true 后不再开始新的文档
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// 按顺序转换来源中的所有文档
    ///
    /// 只有列出文档失败才返回错误；单个文档的失败记录在 `BatchOutcome::failures` 中。
    pub fn convert_all(&self, source: &dyn DocumentSource) -> AppResult<BatchOutcome> {
        let source_ids = source.source_ids()?;
        let mut outcome = BatchOutcome::default();

        for (idx, source_id) in source_ids.into_iter().enumerate() {
            if self.is_cancelled() {
                warn!("⚠️ 转换已取消，剩余文档不再处理");
                break;
            }
            let index = idx + 1;
            let result = convert_one(source, &source_id, index, &self.config);
            outcome.record(index, source_id, result);
        }

        Ok(outcome)
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    processor: BatchProcessor,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        log_startup(&config.input_folder, config.max_concurrent_documents);

        Ok(Self {
            processor: BatchProcessor::new(config.clone()),
            config,
        })
    }

    /// 取消标志，见 [`BatchProcessor::cancel_flag`]
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.processor.cancel_flag()
    }

    /// 运行应用主逻辑：从输入目录读取，写出到输出目录
    pub async fn run(&self) -> Result<BatchOutcome> {
        self.watch_ctrl_c();

        let source = Arc::new(FolderSource::new(
            &self.config.input_folder,
            &self.config.document_extension,
        ));
        let mut sink = JsonFolderSink::new(&self.config.output_folder);

        let outcome = self.run_with(source, &mut sink).await?;

        // 输出最终统计
        print_final_stats(&outcome.summary, &self.config.output_folder);

        Ok(outcome)
    }

    /// 使用指定的来源和输出端运行
    ///
    /// 列出文档在阻塞线程池中执行；`sink` 借用自调用方，在当前运行时线程上写出。
    /// 没有文档时输出端同样会收到（空的）统计。
    pub async fn run_with<S>(&self, source: Arc<S>, sink: &mut dyn SubjectSink) -> Result<BatchOutcome>
    where
        S: DocumentSource + Send + Sync + 'static,
    {
        info!("\n📁 正在扫描待转换的文档...");
        let lister = Arc::clone(&source);
        let source_ids = tokio::task::spawn_blocking(move || lister.source_ids())
            .await?
            .context("无法列出待转换的文档")?;

        let outcome = if source_ids.is_empty() {
            warn!("⚠️ 没有找到待转换的文档，程序结束");
            BatchOutcome::default()
        } else {
            log_documents_loaded(source_ids.len(), self.batch_size());

            // 处理所有文档
            self.process_all_documents(source, source_ids).await?
        };

        sink.accept(&outcome.subjects, &outcome.summary)
            .context("写出转换结果失败")?;

        Ok(outcome)
    }

    fn batch_size(&self) -> usize {
        self.config.max_concurrent_documents.max(1)
    }

    /// Ctrl-C 时设置取消标志
    fn watch_ctrl_c(&self) {
        let cancel = self.cancel_flag();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("⚠️ 收到中断信号，当前批次完成后停止");
                cancel.store(true, Ordering::Relaxed);
            }
        });
    }

    /// 处理所有文档
    async fn process_all_documents<S>(&self, source: Arc<S>, source_ids: Vec<String>) -> Result<BatchOutcome>
    where
        S: DocumentSource + Send + Sync + 'static,
    {
        let batch_size = self.batch_size();
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = source_ids.len();
        let total_batches = total.div_ceil(batch_size);
        let mut outcome = BatchOutcome::default();

        // 分批处理
        for batch_start in (0..total).step_by(batch_size) {
            if self.processor.is_cancelled() {
                warn!("⚠️ 转换已取消，剩余 {} 个文档不再处理", total - batch_start);
                break;
            }

            let batch_end = (batch_start + batch_size).min(total);
            let batch_num = (batch_start / batch_size) + 1;

            log_batch_start(batch_num, total_batches, batch_start + 1, batch_end, total);

            // 处理本批
            let results = self
                .process_batch(
                    Arc::clone(&source),
                    &source_ids[batch_start..batch_end],
                    batch_start,
                    Arc::clone(&semaphore),
                )
                .await?;

            let batch_total = results.len();
            let converted_before = outcome.summary.documents_converted;
            for (index, source_id, result) in results {
                outcome.record(index, source_id, result);
            }

            log_batch_complete(
                batch_num,
                outcome.summary.documents_converted - converted_before,
                batch_total,
            );
        }

        Ok(outcome)
    }

    /// 处理单个批次，结果按输入顺序返回
    async fn process_batch<S>(
        &self,
        source: Arc<S>,
        batch_ids: &[String],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<Vec<(usize, String, AppResult<DocumentConversion>)>>
    where
        S: DocumentSource + Send + Sync + 'static,
    {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, source_id) in batch_ids.iter().enumerate() {
            if self.processor.is_cancelled() {
                break;
            }

            let index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let source = Arc::clone(&source);
            let config = self.config.clone();
            let id = source_id.clone();

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                convert_one(source.as_ref(), &id, index, &config)
            });
            batch_handles.push((index, source_id.clone(), handle));
        }

        // 等待本批所有任务完成
        let results = join_all(
            batch_handles
                .into_iter()
                .map(|(index, source_id, handle)| async move { (index, source_id, handle.await) }),
        )
        .await;

        Ok(results
            .into_iter()
            .map(|(index, source_id, joined)| {
                let result = joined.unwrap_or_else(|e| {
                    error!("[文档 {}] 任务执行失败: {}", index, e);
                    Err(AppError::Other(format!("任务执行失败: {}", e)))
                });
                (index, source_id, result)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemorySource;

    const GOOD_DOC: &str = "1. What is 2+2?\nA) 3\nB) 4\nAnswer: B";

    #[test]
    fn test_convert_all_isolates_failures() {
        let source = InMemorySource::new()
            .with_document("math_one", GOOD_DOC)
            .with_failure("broken", "permission denied")
            .with_document("prose", "no questions here")
            .with_document("math_two", GOOD_DOC);

        let outcome = BatchProcessor::new(Config::default())
            .convert_all(&source)
            .unwrap();

        assert_eq!(
            outcome.summary,
            ConversionSummary {
                documents_seen: 4,
                documents_converted: 2,
                total_questions: 2,
            }
        );
        let failed: Vec<(usize, &str)> = outcome
            .failures
            .iter()
            .map(|f| (f.index, f.source_id.as_str()))
            .collect();
        assert_eq!(failed, vec![(2, "broken"), (3, "prose")]);
        assert!(outcome.failures[1].error.is_nothing_to_convert());
    }

    #[test]
    fn test_cancelled_before_start_sees_nothing() {
        let source = InMemorySource::new().with_document("math", GOOD_DOC);
        let processor = BatchProcessor::new(Config::default());
        processor.cancel_flag().store(true, Ordering::Relaxed);

        let outcome = processor.convert_all(&source).unwrap();
        assert_eq!(outcome.summary, ConversionSummary::default());
        assert!(outcome.subjects.is_empty());
    }
}
