//! Call-stack snapshots for error chains.
//!
//! This crate provides the two location types used by `causa` error chains:
//!
//! - [`Frame`]: a single stack location, kept as a raw instruction pointer and
//!   decoded into file, line and function name only when asked.
//! - [`Stack`]: an ordered, immutable sequence of frames captured once, origin
//!   (deepest call site) first.
//!
//! ## Usage Examples
//!
//! ```
//! use causa_trace::{FrameFormat, Stack};
//!
//! fn failing_call() -> Stack {
//!     // 0 = start at the function calling `capture`
//!     Stack::capture(0)
//! }
//!
//! let stack = failing_call();
//! if let Some(origin) = stack.stack_source() {
//!     println!("{}", origin.display(FrameFormat::FuncName));
//!     println!("{origin:#}");
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: serialize [`Frame`] as its canonical single-line text

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod frame;
mod stack;
mod symbolize;

pub use frame::{Frame, FrameDisplay, FrameFormat};
pub use stack::{MAX_DEPTH, Stack};
pub use symbolize::UNKNOWN;
