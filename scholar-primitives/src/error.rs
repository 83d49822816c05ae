//! Error types for the Scholarship primitives.

use thiserror::Error;

/// Errors raised while parsing primitive values from text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    /// Input was not valid hexadecimal
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Decoded value had the wrong number of bytes
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// A specialized `Result` type for primitive parsing.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
