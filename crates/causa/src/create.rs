//! Constructors for new chains.

use core::hint::black_box;

use crate::error::{BoxError, TextError};
use crate::info::EmptyInfo;
use crate::node::{ChainError, attach};

/// Creates a chain whose root is a [`TextError`] with the given text.
///
/// The returned node renders as `text`, and its stack starts at the call to
/// `new`.
///
/// ```
/// let err = causa::new("foo");
/// assert_eq!(err.to_string(), "foo");
/// ```
#[inline(never)]
pub fn new<S: Into<String>>(text: S) -> ChainError {
    let leaf: BoxError = Box::new(TextError::new(text));
    black_box(attach(leaf, EmptyInfo))
}

/// Formats a message and creates a chain from it, like [`new`].
///
/// ```
/// let err = causa::errorf!("{}-{}", "x", 1);
/// assert_eq!(err.to_string(), "x-1");
/// ```
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::new(::std::format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cause, get_error_info};

    #[test]
    fn test_new_renders_text() {
        assert_eq!(new("foo").to_string(), "foo");
    }

    #[test]
    fn test_errorf_formats_first() {
        assert_eq!(errorf!("{} {} {}", "foo", "foo", "foo").to_string(), "foo foo foo");
        assert_eq!(errorf!("{}-{}", "x", 1).to_string(), "x-1");
    }

    #[test]
    fn test_new_roots_chain_in_text_error() {
        let err = new("whoops");
        let root = cause(&err).downcast_ref::<TextError>();
        assert_eq!(root, Some(&TextError::new("whoops")));
        assert_eq!(get_error_info::<EmptyInfo>(&err), Some(&EmptyInfo));
    }
}
