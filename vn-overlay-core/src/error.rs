//! Unified error type definition

use thiserror::Error;

/// Overlay layer error type
#[derive(Error, Debug)]
pub enum OverlayError {
    /// Response payload did not have the expected shape
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The messaging channel is no longer usable
    #[error("messaging channel closed")]
    ChannelClosed,
}

/// Overlay layer result type
pub type OverlayResult<T> = Result<T, OverlayError>;
