//! Error types for Horizon Tabular core.

use std::fmt;

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

/// A specialized Result type for core signal operations.
pub type Result<T> = std::result::Result<T, SignalError>;
