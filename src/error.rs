use std::io;
use thiserror::Error;

/// 容器自身产生的错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    /// 使用 of 构造时传入了空值
    #[error("Cannot construct a present value from null")]
    NullConstruction,

    /// 对空容器直接取值
    #[error("No value present")]
    AbsentValue,
}

/// 应用错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML 解析错误
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// 容器访问错误
    #[error("Optional error: {0}")]
    Optional(#[from] OptionalError),
}
