//! Metadata attached to chain nodes.
//!
//! Every [`ChainError`](crate::ChainError) carries exactly one [`ErrorInfo`]
//! value. The metadata decides how the node renders, optionally folding in the
//! rendering of its cause, and can be recovered later by type with
//! [`get_error_info`](crate::get_error_info) and friends.

use core::any::Any;
use core::fmt;
use std::error::Error;

/// Diagnostic metadata that knows how to render its node.
///
/// Implementations are plain values; attach them with
/// [`with_error_info`](crate::with_error_info). Any type may be used, and
/// lookups match on the concrete type.
///
/// ```
/// use causa::ErrorInfo;
/// use std::{error::Error, fmt};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Status(u16);
///
/// impl ErrorInfo for Status {
///     fn when_error(
///         &self,
///         cause: Option<&(dyn Error + 'static)>,
///         f: &mut fmt::Formatter<'_>,
///     ) -> fmt::Result {
///         match cause {
///             Some(cause) => write!(f, "status {}: {cause}", self.0),
///             None => write!(f, "status {}", self.0),
///         }
///     }
/// }
///
/// let err = causa::with_error_info(causa::new("not found"), Status(404));
/// assert_eq!(err.to_string(), "status 404: not found");
/// assert_eq!(causa::get_error_info::<Status>(&err), Some(&Status(404)));
/// ```
pub trait ErrorInfo: Any + fmt::Debug + Send + Sync {
    /// Writes the node's message, given the node's cause if it has one.
    fn when_error(
        &self,
        cause: Option<&(dyn Error + 'static)>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result;
}

/// Structural wrap: the node renders exactly as its cause, or as an empty
/// string if it has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyInfo;

impl ErrorInfo for EmptyInfo {
    fn when_error(
        &self,
        cause: Option<&(dyn Error + 'static)>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match cause {
            Some(cause) => fmt::Display::fmt(cause, f),
            None => Ok(()),
        }
    }
}

/// Text annotation: renders as `"<text>: <cause>"`, or `"<text>"` alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Creates an annotation.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// Returns the annotation text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl ErrorInfo for Message {
    fn when_error(
        &self,
        cause: Option<&(dyn Error + 'static)>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match cause {
            Some(cause) => write!(f, "{}: {cause}", self.0),
            None => f.write_str(&self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextError;

    struct Rendered<'a, I>(&'a I, Option<&'a (dyn Error + 'static)>);

    impl<I: ErrorInfo> fmt::Display for Rendered<'_, I> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.when_error(self.1, f)
        }
    }

    #[test]
    fn test_empty_info_renders_cause() {
        let eof = TextError::new("EOF");
        assert_eq!(Rendered(&EmptyInfo, Some(&eof)).to_string(), "EOF");
    }

    #[test]
    fn test_empty_info_without_cause_is_empty() {
        assert_eq!(Rendered(&EmptyInfo, None).to_string(), "");
    }

    #[test]
    fn test_message_prefixes_cause() {
        let eof = TextError::new("EOF");
        let msg = Message::new("read error");
        assert_eq!(Rendered(&msg, Some(&eof)).to_string(), "read error: EOF");
        assert_eq!(msg.as_str(), "read error");
    }

    #[test]
    fn test_message_without_cause_is_its_text() {
        assert_eq!(Rendered(&Message::from("alone"), None).to_string(), "alone");
    }
}
