//! 输出端 - 基础设施层
//!
//! 接收转换完成的科目记录。写出前先修复选项格式。

use crate::error::{AppError, AppResult};
use crate::models::{ConversionSummary, SubjectRecord};
use crate::services::document_assembler::slugify;
use crate::services::options_normalizer::normalize_subject;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// 科目记录的接收端
pub trait SubjectSink {
    fn accept(&mut self, subjects: &[SubjectRecord], summary: &ConversionSummary) -> AppResult<()>;
}

/// slug 为空时使用的文件名
const FALLBACK_STEM: &str = "subject";

/// 每个科目写成一个 JSON 文件：`<输出目录>/<科目名 slug>.json`
///
/// 同一次写出中 slug 重复的科目依次加上 `-2`、`-3` 后缀，不会互相覆盖。
#[derive(Debug, Clone)]
pub struct JsonFolderSink {
    output_folder: PathBuf,
}

impl JsonFolderSink {
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    /// 某个科目对应的输出文件路径，`used` 记录本次已经占用的文件名
    pub fn path_for(&self, subject: &SubjectRecord, used: &mut HashSet<String>) -> PathBuf {
        let mut base = slugify(&subject.name);
        if base.is_empty() {
            base = FALLBACK_STEM.to_string();
        }

        let mut stem = base.clone();
        let mut n = 1;
        while !used.insert(stem.clone()) {
            n += 1;
            stem = format!("{}-{}", base, n);
        }
        self.output_folder.join(format!("{}.json", stem))
    }
}

impl SubjectSink for JsonFolderSink {
    fn accept(&mut self, subjects: &[SubjectRecord], summary: &ConversionSummary) -> AppResult<()> {
        std::fs::create_dir_all(&self.output_folder).map_err(|e| {
            AppError::file_write_failed(self.output_folder.display().to_string(), e)
        })?;

        let mut used = HashSet::new();
        for subject in subjects {
            let mut subject = subject.clone();
            let repaired = normalize_subject(&mut subject);
            if repaired > 0 {
                debug!("科目 {} 修复了 {} 道题的选项", subject.name, repaired);
            }

            let path = self.path_for(&subject, &mut used);
            let json = serde_json::to_string_pretty(&subject)?;
            std::fs::write(&path, json)
                .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
            debug!("已写入: {} ({} 道题)", path.display(), subject.question_count());
        }

        info!(
            "✓ 已写出 {} 个科目 (共 {} 道题)",
            subjects.len(),
            summary.total_questions
        );
        Ok(())
    }
}

/// 把结果收集在内存中的接收端
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub subjects: Vec<SubjectRecord>,
    pub summary: Option<ConversionSummary>,
}

impl SubjectSink for CollectingSink {
    fn accept(&mut self, subjects: &[SubjectRecord], summary: &ConversionSummary) -> AppResult<()> {
        self.subjects.extend(subjects.iter().cloned().map(|mut subject| {
            normalize_subject(&mut subject);
            subject
        }));
        self.summary = Some(*summary);
        Ok(())
    }
}
