//! API Error Types
//!
//! Defines error types for requests against the backend. Failures are
//! contained to the control that triggered them, so these errors are
//! rendered as toasts and logged rather than propagated further.

use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
