use thiserror::Error;

/// Error type that captures the client's failure modes.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}
