//! Error types for fetchwire
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

/// Unified error type for fetchwire operations
#[derive(Debug, Error)]
pub enum FetchError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    /// The peer closed the stream before the requested byte count arrived.
    /// Fatal to the in-progress message; never retried.
    #[error("connection closed prematurely by the server: received {received}/{expected} bytes")]
    ConnectionClosedEarly { received: usize, expected: usize },

    /// A configured socket deadline expired mid-read. Handled the same way as
    /// a premature close: the current message is abandoned.
    #[error("read timed out: received {received}/{expected} bytes")]
    ReadTimeout { received: usize, expected: usize },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: u32, max: u32 },
}

impl FetchError {
    /// Whether this error means the stream ended (or stalled past its
    /// deadline) before a full message arrived.
    pub fn is_stream_exhausted(&self) -> bool {
        matches!(
            self,
            FetchError::ConnectionClosedEarly { .. } | FetchError::ReadTimeout { .. }
        )
    }
}
