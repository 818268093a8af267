//! Error handling for the skill ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillRankerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillRankerError {
    fn from(err: anyhow::Error) -> Self {
        SkillRankerError::InvalidInput(format!("{:#}", err))
    }
}
