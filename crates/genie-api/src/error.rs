use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("request entity too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: u64 },

    #[error("invalid JSON body: {0}")]
    BadRequest(String),
}

impl ApiError {
    /// HTTP status the error is reported with.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::PayloadTooLarge { .. } => 413,
            Self::BadRequest(_) => 400,
            Self::Bind { .. } | Self::Io(_) | Self::Encode(_) => 500,
        }
    }
}
