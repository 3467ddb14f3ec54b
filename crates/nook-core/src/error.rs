#[derive(Debug, thiserror::Error)]
pub enum NookError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream inference error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Inference model error: {0}")]
    Model(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NookError {
    /// Builds an error from a non-success upstream reply. Hosted inference
    /// APIs report failures as `{"error": "..."}`, so that message is
    /// preferred over the raw body when present.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.to_string());

        NookError::Upstream { status, message }
    }

    /// The failure envelope returned by every endpoint.
    pub fn to_json_error(&self) -> serde_json::Value {
        serde_json::json!({
            "success": false,
            "error": self.to_string()
        })
    }
}

pub type Result<T> = std::result::Result<T, NookError>;

/// serde_json is only used to decode request bodies.
impl From<serde_json::Error> for NookError {
    fn from(e: serde_json::Error) -> Self {
        NookError::InvalidBody(e.to_string())
    }
}
