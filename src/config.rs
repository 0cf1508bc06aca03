use crate::error::{AppError, AppResult, ConfigError};
use crate::models::Difficulty;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待转换文档所在目录
    pub input_folder: String,
    /// JSON 输出目录
    pub output_folder: String,
    /// 待转换文档的扩展名（不含点）
    pub document_extension: String,
    /// 同时转换的文档数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 题目默认难度
    pub default_difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: "input_docs".to_string(),
            output_folder: "output_json".to_string(),
            document_extension: "txt".to_string(),
            max_concurrent_documents: 8,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            default_difficulty: Difficulty::Medium,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            document_extension: std::env::var("DOCUMENT_EXTENSION").unwrap_or(default.document_extension),
            max_concurrent_documents: env_parse("MAX_CONCURRENT_DOCUMENTS", "usize")?.unwrap_or(default.max_concurrent_documents),
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool")?.unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            default_difficulty: env_parse("DEFAULT_DIFFICULTY", "easy|medium|hard")?.unwrap_or(default.default_difficulty),
        })
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            AppError::Config(ConfigError::TomlParseFailed { source, .. }) => {
                AppError::Config(ConfigError::TomlParseFailed {
                    path: path.display().to_string(),
                    source,
                })
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// 读取并解析环境变量；未设置时返回 `None`
fn env_parse<T: FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }),
        Err(_) => Ok(None),
    }
}
