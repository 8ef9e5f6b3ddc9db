use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Degenerate label set: all {count} markers are on side {side}")]
    DegenerateLabelSet { side: u8, count: usize },

    #[error("Numeric instability: {reason}")]
    NumericInstability { reason: String },

    #[error("Invalid marker side value: {value}")]
    InvalidSide { value: i64 },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
