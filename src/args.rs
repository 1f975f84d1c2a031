use crate::r#const::DEFAULT_CONFIG_PATH;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

// optional-demo - 单值容器演示工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "optional-demo",
    author,
    version,
    about = "Loads a YAML record file and resolves every record's email, position and \n\
             email validity through Optional fallbacks, mapping, flattening and filtering."
)]
pub struct Args {
    // 记录文件路径
    #[clap(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to the record file"
    )]
    pub config: PathBuf,

    // 是否开启调试模式
    #[clap(
        short,
        long,
        action = ArgAction::SetTrue,
        help = "Enable debug mode"
    )]
    pub debug: bool,

    // 是否仅测试记录文件
    #[clap(
        short = 't',
        long = "test",
        action = ArgAction::SetTrue,
        help = "Test record file for validity and exit"
    )]
    pub test_config: bool,

    // 职位缺失时是否报错
    #[clap(
        long = "require-position",
        action = ArgAction::SetTrue,
        help = "Fail when a record has no position instead of using the default"
    )]
    pub require_position: bool,
}

impl Args {
    // 解析命令行参数
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
