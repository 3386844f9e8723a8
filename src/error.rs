//! Error types for the cipher library.

use std::fmt;

/// Errors produced by the cipher library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Text passed to an encrypt operation contains a character outside
    /// the supported alphabet window.
    TextOutOfBounds,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::TextOutOfBounds => {
                write!(
                    f,
                    "Text contains a character outside the supported alphabet window"
                )
            }
        }
    }
}

impl std::error::Error for CipherError {}
