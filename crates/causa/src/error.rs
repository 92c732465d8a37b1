//! Error types for the causa crate
//!
//! Chains are made of [`ChainError`](crate::ChainError) nodes whose causes are
//! held as [`BoxError`]. The root of a chain built by [`new`](crate::new) or
//! [`errorf!`](crate::errorf) is a [`TextError`].

use thiserror::Error;

use crate::ChainError;

/// Owned, thread-safe, type-erased error. Every chain node holds its cause
/// this way.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for fallible operations that report a [`ChainError`].
pub type Result<T, E = ChainError> = std::result::Result<T, E>;

/// A plain message error with no cause of its own.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{text}")]
pub struct TextError {
    text: String,
}

impl TextError {
    /// Creates an error that renders as `text`.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Returns the message.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<String> for TextError {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextError {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
