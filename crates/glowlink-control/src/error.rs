//! Error types for the control layer
use thiserror::Error;

/// Control layer errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// I/O error from the transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Command issued before `connect` or after `disconnect`
    #[error("Session is not connected")]
    NotConnected,

    /// `connect` called on an already-connected session
    #[error("Session is already connected")]
    AlreadyConnected,

    /// Frame could not be decoded
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;
