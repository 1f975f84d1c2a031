use std::collections::HashSet;

use crate::error::AppError;
use crate::r#const::record_limits;
use tracing::debug;

use super::Config;

impl Config {
    // 验证配置
    pub fn validate(&self) -> Result<(), AppError> {
        if self.records.is_empty() {
            return Err(AppError::Config("Record file defines no records".to_string()));
        }

        if self.records.len() > record_limits::MAX_RECORDS {
            return Err(AppError::Config(format!(
                "Record file defines {} records, at most {} are allowed",
                self.records.len(),
                record_limits::MAX_RECORDS
            )));
        }

        let mut names = HashSet::new();
        for (index, record) in self.records.iter().enumerate() {
            // 名称不能为空
            if record.name().trim().is_empty() {
                return Err(AppError::Config(format!(
                    "Record at index {} has an empty name",
                    index
                )));
            }

            if record.name().chars().count() > record_limits::MAX_NAME_LENGTH {
                return Err(AppError::Config(format!(
                    "Record '{}' name exceeds {} characters",
                    record.name(),
                    record_limits::MAX_NAME_LENGTH
                )));
            }

            // 名称唯一性
            if !names.insert(record.name()) {
                return Err(AppError::Config(format!(
                    "Duplicate record name: '{}'",
                    record.name()
                )));
            }

            // 邮箱不含 '@' 是允许的，由过滤场景处理
            if !record.has_valid_email() {
                debug!(
                    "Record '{}' has an email without '@': {}",
                    record.name(),
                    record.email()
                );
            }
        }

        Ok(())
    }
}
