// 应用常量定义

// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "records.yaml";

// 缺省回退值
pub mod fallback {
    // 邮箱缺失时的默认值
    pub const DEFAULT_EMAIL: &str = "default@gmail.com";
    // 职位缺失时的默认值
    pub const DEFAULT_POSITION: &str = "default";
}

// 记录字段限制
pub mod record_limits {
    // 名称最大长度（字符数）
    pub const MAX_NAME_LENGTH: usize = 128;
    // 单个文件最多记录数
    pub const MAX_RECORDS: usize = 1024;
}
