use thiserror::Error;

/// Failures raised by the task API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, bad TLS, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds a server error from a failure body.
    ///
    /// The body optionally carries a `detail` field: string details are kept
    /// verbatim, structured details are stringified, anything else falls back
    /// to a status-derived message.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| match value.get("detail") {
                Some(serde_json::Value::String(detail)) => Some(detail.clone()),
                Some(detail) => Some(detail.to_string()),
                None => None,
            })
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Server { status, message }
    }

    /// Single human-readable line suitable for a root-level form error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
