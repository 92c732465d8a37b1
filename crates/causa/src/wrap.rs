//! Wrapping and annotating existing errors.
//!
//! The free functions take an error that is known to exist. [`WrapExt`] offers
//! the same operations on `Result` and `Option`, where `Ok` and `None` stand
//! for "no error" and pass through untouched.

use core::fmt;
use core::hint::black_box;

use crate::error::BoxError;
use crate::info::{EmptyInfo, ErrorInfo, Message};
use crate::node::{ChainError, attach};

/// Wraps `err` without changing how it renders.
///
/// ```
/// let err = causa::wrap(causa::TextError::new("EOF"));
/// assert_eq!(err.to_string(), "EOF");
/// ```
#[inline(never)]
pub fn wrap<E: Into<BoxError>>(err: E) -> ChainError {
    black_box(attach(err.into(), EmptyInfo))
}

/// Annotates `err` with a message; the result renders as `"<text>: <err>"`.
///
/// ```
/// let err = causa::with_message(causa::TextError::new("EOF"), "read error");
/// assert_eq!(err.to_string(), "read error: EOF");
/// ```
#[inline(never)]
pub fn with_message<E: Into<BoxError>, S: Into<String>>(err: E, text: S) -> ChainError {
    black_box(attach(err.into(), Message::new(text)))
}

/// Attaches caller-defined metadata to `err`.
#[inline(never)]
pub fn with_error_info<E: Into<BoxError>, I: ErrorInfo>(err: E, info: I) -> ChainError {
    black_box(attach(err.into(), info))
}

/// Annotates an error with a formatted message, like
/// [`with_message`](crate::with_message).
///
/// Without extra arguments the text is used verbatim, so braces in it are not
/// interpreted.
///
/// ```
/// use causa::{TextError, with_messagef};
///
/// let err = with_messagef!(TextError::new("EOF"), "read error with {} format specifier", 1);
/// assert_eq!(err.to_string(), "read error with 1 format specifier: EOF");
///
/// let err = with_messagef!(TextError::new("EOF"), "literal {braces}");
/// assert_eq!(err.to_string(), "literal {braces}: EOF");
/// ```
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! with_messagef {
    ($err:expr, $text:expr $(,)?) => {
        $crate::with_message($err, $text)
    };
    ($err:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::with_message($err, ::std::format!($fmt, $($arg)+))
    };
}

/// Wrapping operations for values that may or may not hold an error.
///
/// `Ok` and `None` mean "no error": they are returned unchanged and nothing is
/// captured. Only the error arm is wrapped.
///
/// ```
/// use causa::WrapExt;
/// use std::io;
///
/// fn read() -> Result<u8, io::Error> {
///     Err(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"))
/// }
///
/// let err = read().with_message("read error").unwrap_err();
/// assert_eq!(err.to_string(), "read error: EOF");
///
/// assert!(Ok::<u8, io::Error>(1).wrap().is_ok());
/// assert!(None::<io::Error>.with_message("whoops").is_none());
/// ```
pub trait WrapExt {
    /// The same container with its error arm replaced by a [`ChainError`].
    type Wrapped;

    /// Wraps the error, if any, without changing how it renders.
    fn wrap(self) -> Self::Wrapped;

    /// Annotates the error, if any, with a message.
    fn with_message<S: Into<String>>(self, text: S) -> Self::Wrapped;

    /// Annotates the error, if any, with a message built from `args`.
    fn with_message_fmt(self, args: fmt::Arguments<'_>) -> Self::Wrapped;

    /// Attaches caller-defined metadata to the error, if any.
    fn with_error_info<I: ErrorInfo>(self, info: I) -> Self::Wrapped;
}

impl<T, E: Into<BoxError>> WrapExt for Result<T, E> {
    type Wrapped = Result<T, ChainError>;

    #[inline(never)]
    fn wrap(self) -> Self::Wrapped {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(black_box(attach(err.into(), EmptyInfo))),
        }
    }

    #[inline(never)]
    fn with_message<S: Into<String>>(self, text: S) -> Self::Wrapped {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(black_box(attach(err.into(), Message::new(text)))),
        }
    }

    #[inline(never)]
    fn with_message_fmt(self, args: fmt::Arguments<'_>) -> Self::Wrapped {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(black_box(attach(err.into(), Message::new(args.to_string())))),
        }
    }

    #[inline(never)]
    fn with_error_info<I: ErrorInfo>(self, info: I) -> Self::Wrapped {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(black_box(attach(err.into(), info))),
        }
    }
}

impl<E: Into<BoxError>> WrapExt for Option<E> {
    type Wrapped = Option<ChainError>;

    #[inline(never)]
    fn wrap(self) -> Self::Wrapped {
        match self {
            Some(err) => Some(black_box(attach(err.into(), EmptyInfo))),
            None => None,
        }
    }

    #[inline(never)]
    fn with_message<S: Into<String>>(self, text: S) -> Self::Wrapped {
        match self {
            Some(err) => Some(black_box(attach(err.into(), Message::new(text)))),
            None => None,
        }
    }

    #[inline(never)]
    fn with_message_fmt(self, args: fmt::Arguments<'_>) -> Self::Wrapped {
        match self {
            Some(err) => Some(black_box(attach(err.into(), Message::new(args.to_string())))),
            None => None,
        }
    }

    #[inline(never)]
    fn with_error_info<I: ErrorInfo>(self, info: I) -> Self::Wrapped {
        match self {
            Some(err) => Some(black_box(attach(err.into(), info))),
            None => None,
        }
    }
}
