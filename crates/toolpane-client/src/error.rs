//! Error types for the widget client.

use thiserror::Error;

/// Errors that can occur during widget client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The host answered a request with an error object.
    #[error("Host error: {0}")]
    Host(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The transport or a pending request channel closed mid-flight.
    #[error("Channel closed")]
    ChannelClosed,

    /// The host never answered the initialize request in time.
    #[error("Timeout waiting for handshake response")]
    HandshakeTimeout,
}
