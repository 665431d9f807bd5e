use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown factor: {0}")]
    UnknownFactor(String),

    #[error("unknown risk category: {0}")]
    UnknownCategory(String),

    #[error("invalid location '{input}': {reason}")]
    InvalidLocation { input: String, reason: String },
}
