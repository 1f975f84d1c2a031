// 导出子模块
pub mod defaults;
pub mod validation;

use crate::config::defaults::{default_email, default_position};
use crate::error::AppError;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

// 记录文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // 回退值配置
    #[serde(default)]
    pub defaults: FallbackConfig,
    // 记录列表
    #[serde(default)]
    pub records: Vec<Record>,
}

// 字段缺失时使用的回退值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    // 默认邮箱
    #[serde(default = "default_email")]
    pub email: String,
    // 默认职位
    #[serde(default = "default_position")]
    pub position: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            position: default_position(),
        }
    }
}

impl Config {
    // 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        debug!("Attempting to load records from file: {:?}", path);

        // 打开并读取文件
        let mut file = File::open(path).map_err(|e| {
            AppError::Config(format!("Unable to open record file {:?}: {}", path, e))
        })?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let config = Self::from_yaml(&content)?;
        debug!("Loaded {} records from {:?}", config.records.len(), path);

        Ok(config)
    }

    // 从 YAML 文本解析并验证
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
