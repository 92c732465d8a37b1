//! Error chains with typed metadata and call stacks.
//!
//! Errors are built up as they propagate: each layer wraps the error it
//! received in a [`ChainError`], optionally attaching a message or any
//! caller-defined [`ErrorInfo`]. The first wrap of a chain captures the call
//! stack; later wraps reuse that snapshot, so the chain always points at the
//! place where it began.
//!
//! ## Key Components
//!
//! - **Constructors**: [`new`], [`errorf!`], [`wrap`], [`with_message`],
//!   [`with_messagef!`], [`with_error_info`], and [`WrapExt`] for `Result`
//!   and `Option`
//! - **Metadata**: the [`ErrorInfo`] trait with the built-in [`EmptyInfo`] and
//!   [`Message`]
//! - **Traversal**: [`cause`], [`get_error_info`], [`get_all_error_info`],
//!   [`get_original_error_info`], [`get_stack`], [`get_stack_cause`], plus
//!   [`chain`], [`find`] and [`is`]
//! - **Locations**: [`Stack`] and [`Frame`], re-exported from `causa-trace`
//!
//! ## Usage Examples
//!
//! ```
//! use causa::{Message, WrapExt, get_all_error_info, get_stack_cause};
//!
//! fn load() -> causa::Result<()> {
//!     Err(causa::new("whoops"))
//! }
//!
//! fn handle() -> causa::Result<()> {
//!     load().with_message("msg1").with_message("msg2")
//! }
//!
//! let err = handle().unwrap_err();
//! assert_eq!(err.to_string(), "msg2: msg1: whoops");
//! assert_eq!(causa::cause(&err).to_string(), "whoops");
//!
//! let messages: Vec<&str> = get_all_error_info::<Message>(&err)
//!     .into_iter()
//!     .map(Message::as_str)
//!     .collect();
//! assert_eq!(messages, ["msg2", "msg1"]);
//!
//! // The origin frame is the function that called `causa::new`.
//! let origin = get_stack_cause(&err).unwrap();
//! println!("{origin:#}");
//! ```
//!
//! # Features
//!
//! - `serde`: serialize [`Frame`] as its canonical single-line text

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-export the location crate that is part of our public API
pub use causa_trace;

mod create;
pub mod error;
mod info;
mod node;
mod traverse;
mod wrap;


// Location types
pub use causa_trace::{Frame, FrameDisplay, FrameFormat, MAX_DEPTH, Stack, UNKNOWN};

// Core types
pub use error::{BoxError, Result, TextError};
pub use info::{EmptyInfo, ErrorInfo, Message};
pub use node::ChainError;

// Constructors
pub use create::new;
pub use wrap::{WrapExt, with_error_info, with_message, wrap};

// Traversal
pub use traverse::{
    Chain, cause, chain, find, get_all_error_info, get_error_info, get_original_error_info,
    get_stack, get_stack_cause, is,
};
