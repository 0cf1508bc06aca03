use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 文档转换错误
    #[error("转换错误: {0}")]
    Conversion(#[from] ConversionError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// JSON 序列化错误
    #[error("序列化错误: {0}")]
    Serialize(#[from] serde_json::Error),
    /// 其他错误
    #[error("错误: {0}")]
    Other(String),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 文档转换错误
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 文档中没有任何可用的题目
    #[error("文档 {source_id} 没有可用的题目 (共 {blocks} 个题块)")]
    NoAcceptedQuestions { source_id: String, blocks: usize },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: err,
        })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(ConfigError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建"无可用题目"错误
    pub fn no_accepted_questions(source_id: impl Into<String>, blocks: usize) -> Self {
        AppError::Conversion(ConversionError::NoAcceptedQuestions {
            source_id: source_id.into(),
            blocks,
        })
    }

    /// 是否为"文档里没有题目"这类非致命结果
    pub fn is_nothing_to_convert(&self) -> bool {
        matches!(
            self,
            AppError::Conversion(ConversionError::NoAcceptedQuestions { .. })
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_file_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
    }

    #[test]
    fn test_no_accepted_questions_is_nothing_to_convert() {
        let err = AppError::no_accepted_questions("misc", 4);
        assert!(err.is_nothing_to_convert());
        assert!(err.to_string().contains("misc"));

        let other = AppError::Other("boom".to_string());
        assert!(!other.is_nothing_to_convert());
    }
}
