use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("frame encoding error: {0}")]
    Frame(#[from] serde_json::Error),

    /// A line exceeded the configured maximum before its newline arrived.
    #[error("frame exceeds {limit} bytes")]
    FrameTooLarge { limit: usize },

    /// The hub task has stopped; no more commands can be delivered.
    #[error("relay hub is not running")]
    HubClosed,

    /// The peer closed the connection or sent something unexpected during
    /// the handshake.
    #[error("connection closed: {0}")]
    Closed(String),
}
