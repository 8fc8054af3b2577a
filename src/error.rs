use thiserror::Error;

/// Main error type for Flutterdoc operations
#[derive(Error, Debug)]
pub enum FlutterdocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Edit error: {0}")]
    Edit(String),
}

pub type Result<T> = std::result::Result<T, FlutterdocError>;
