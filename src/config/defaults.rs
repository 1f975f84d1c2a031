use crate::r#const::fallback;

// 默认邮箱回退值
pub fn default_email() -> String {
    fallback::DEFAULT_EMAIL.to_string()
}

// 默认职位回退值
pub fn default_position() -> String {
    fallback::DEFAULT_POSITION.to_string()
}
