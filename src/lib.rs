pub mod args;
pub mod config;
pub mod r#const;
pub mod error;
pub mod optional;
pub mod record;
pub mod summary;

pub use crate::error::OptionalError;
pub use crate::optional::Optional;
pub use crate::record::Record;
