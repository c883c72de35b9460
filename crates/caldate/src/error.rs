//! Error types for caldate operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalDateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown recurrence rule: {0}")]
    UnknownRule(String),
}

pub type Result<T> = std::result::Result<T, CalDateError>;
