use crate::optional::Optional;
use serde::{Deserialize, Serialize};

/// 演示用记录：姓名、邮箱必填，职位可缺省
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    // 姓名
    name: String,
    // 邮箱
    email: String,
    // 职位，未设置时为空
    #[serde(default)]
    position: Optional<String>,
}

impl Record {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: Optional::empty(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// 职位可能不存在，因此以容器形式返回
    pub fn position(&self) -> Optional<&str> {
        self.position.as_ref().map(String::as_str)
    }

    /// 传入 `None` 会清除职位
    pub fn set_position(&mut self, position: Option<String>) {
        self.position = Optional::of_nullable(position);
    }

    /// 邮箱是否包含 '@'
    pub fn has_valid_email(&self) -> bool {
        self.email.contains('@')
    }
}
