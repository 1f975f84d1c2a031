use crate::config::FallbackConfig;
use crate::error::AppError;
use crate::optional::Optional;
use crate::record::Record;
use tracing::debug;

/// 单条记录经容器操作解析后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub name: String,
    pub email: String,
    pub position: String,
    pub email_valid: bool,
    // 职位容器的显示形式，例如 `Optional[developer]`
    pub position_display: String,
}

/// 解析一条记录
///
/// `require_position` 为真时，缺失职位会通过 `or_else_throw` 返回配置错误，
/// 否则惰性地使用回退值。
pub fn summarize(
    record: &Record,
    defaults: &FallbackConfig,
    require_position: bool,
) -> Result<RecordSummary, AppError> {
    let name = record.name().to_string();
    let record = Optional::present(record);

    let email = record
        .map(|r| r.email().to_string())
        .or_else(defaults.email.clone());

    let position = record.flat_map(Record::position);
    let position_display = position.to_string();
    let position = if require_position {
        position
            .or_else_throw(|| AppError::Config(format!("Record '{}' has no position", name)))?
            .to_string()
    } else {
        position
            .map(str::to_string)
            .or_else_get(|| defaults.position.clone())
    };

    let email_valid = record.filter(|r| r.has_valid_email()).is_present();

    debug!("Summarized record '{}'", name);

    Ok(RecordSummary {
        name,
        email,
        position,
        email_valid,
        position_display,
    })
}
