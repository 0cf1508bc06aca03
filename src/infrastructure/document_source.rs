//! 文档来源 - 基础设施层
//!
//! 只负责"把原始文本拿进来"，读取失败按单个文档报告，由编排层决定跳过

use crate::error::{AppError, AppResult, FileError};
use crate::models::RawDocument;
use std::path::PathBuf;
use tracing::debug;

/// 原始文档的来源
pub trait DocumentSource {
    /// 按处理顺序列出所有文档标识
    fn source_ids(&self) -> AppResult<Vec<String>>;

    /// 读取单个文档
    fn load(&self, source_id: &str) -> AppResult<RawDocument>;
}

/// 从目录中读取指定扩展名的文本文件，按文件名排序，标识为不含扩展名的文件名
#[derive(Debug, Clone)]
pub struct FolderSource {
    folder: PathBuf,
    extension: String,
}

impl FolderSource {
    pub fn new(folder: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    fn path_for(&self, source_id: &str) -> PathBuf {
        self.folder.join(format!("{}.{}", source_id, self.extension))
    }
}

impl DocumentSource for FolderSource {
    fn source_ids(&self) -> AppResult<Vec<String>> {
        if !self.folder.is_dir() {
            return Err(FileError::DirectoryNotFound {
                path: self.folder.display().to_string(),
            }
            .into());
        }

        let entries = std::fs::read_dir(&self.folder)
            .map_err(|e| AppError::file_read_failed(self.folder.display().to_string(), e))?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();

        debug!("目录 {} 中找到 {} 个文档", self.folder.display(), ids.len());
        Ok(ids)
    }

    fn load(&self, source_id: &str) -> AppResult<RawDocument> {
        let path = self.path_for(source_id);
        if !path.exists() {
            return Err(FileError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Ok(RawDocument::new(source_id, text))
    }
}

/// 内存中的文档来源，可以把某个文档标记为读取失败
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<(String, Result<String, String>)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, source_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push((source_id.into(), Ok(text.into())));
        self
    }

    pub fn with_failure(mut self, source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        self.documents.push((source_id.into(), Err(reason.into())));
        self
    }
}

impl DocumentSource for InMemorySource {
    fn source_ids(&self) -> AppResult<Vec<String>> {
        Ok(self.documents.iter().map(|(id, _)| id.clone()).collect())
    }

    fn load(&self, source_id: &str) -> AppResult<RawDocument> {
        match self.documents.iter().find(|(id, _)| id == source_id) {
            Some((_, Ok(text))) => Ok(RawDocument::new(source_id, text.clone())),
            Some((_, Err(reason))) => Err(AppError::file_read_failed(
                source_id,
                std::io::Error::new(std::io::ErrorKind::Other, reason.clone()),
            )),
            None => Err(FileError::NotFound {
                path: source_id.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_source_lists_sorted_stems() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b_set.txt"), "2. b").unwrap();
        std::fs::write(dir.path().join("a_set.txt"), "1. a").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let source = FolderSource::new(dir.path(), ".txt");
        assert_eq!(source.source_ids().unwrap(), vec!["a_set", "b_set"]);

        let doc = source.load("a_set").unwrap();
        assert_eq!(doc.source_id, "a_set");
        assert_eq!(doc.text, "1. a");
    }

    #[test]
    fn test_folder_source_missing_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let source = FolderSource::new(dir.path(), "txt");
        assert!(matches!(
            source.load("absent"),
            Err(AppError::File(FileError::NotFound { .. }))
        ));

        let missing = FolderSource::new(dir.path().join("nope"), "txt");
        assert!(matches!(
            missing.source_ids(),
            Err(AppError::File(FileError::DirectoryNotFound { .. }))
        ));
    }

    #[test]
    fn test_in_memory_source_failure() {
        let source = InMemorySource::new()
            .with_document("one", "text")
            .with_failure("two", "disk on fire");

        assert_eq!(source.source_ids().unwrap(), vec!["one", "two"]);
        assert!(source.load("one").is_ok());
        let err = source.load("two").unwrap_err();
        assert!(err.to_string().contains("disk on fire"));
    }
}
