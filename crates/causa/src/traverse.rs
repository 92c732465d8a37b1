//! Walking error chains.
//!
//! Every algorithm here follows [`Error::source`] from the outermost error
//! inwards, in a single pass, and borrows what it returns from the chain.
//! Chains are immutable, so any number of threads may walk the same chain.
//!
//! The walks assume a finite chain. Owned causes cannot form a cycle, but a
//! foreign `source` implementation that loops back on itself will make them
//! loop too.

use std::error::Error;
use std::sync::Arc;

use causa_trace::{Frame, Stack};

use crate::info::ErrorInfo;
use crate::node::ChainError;

/// Iterator over an error and its causes, outermost first.
///
/// Created by [`chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}

/// Returns an iterator over `err` and every error reachable through
/// [`Error::source`].
pub const fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

fn nodes<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a ChainError> {
    chain(err).filter_map(|e| e.downcast_ref::<ChainError>())
}

/// Returns the root cause of `err`: the innermost error of its chain.
///
/// An error without a source is its own root cause, including a
/// [`ChainError`] that was built without one.
///
/// ```
/// use causa::{TextError, cause, with_message};
///
/// let err = with_message(with_message(TextError::new("whoops"), "msg1"), "msg2");
/// assert_eq!(cause(&err).to_string(), "whoops");
/// ```
pub fn cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

/// Returns the most recently attached metadata of type `T`.
pub fn get_error_info<'a, T: ErrorInfo>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    nodes(err).find_map(ChainError::error_info_as::<T>)
}

/// Returns every attached metadata value of type `T`, most recent first.
///
/// ```
/// use causa::{ErrorInfo, get_all_error_info, new, with_error_info, with_message};
/// use std::{error::Error, fmt};
///
/// #[derive(Debug, PartialEq)]
/// struct Code(u32);
///
/// impl ErrorInfo for Code {
///     fn when_error(
///         &self,
///         cause: Option<&(dyn Error + 'static)>,
///         f: &mut fmt::Formatter<'_>,
///     ) -> fmt::Result {
///         match cause {
///             Some(cause) => write!(f, "{cause}"),
///             None => write!(f, "{}", self.0),
///         }
///     }
/// }
///
/// let err = with_error_info(new("msg"), Code(100));
/// let err = with_message(with_message(err, "msg1"), "msg2");
/// let err = with_error_info(err, Code(101));
///
/// assert_eq!(get_all_error_info::<Code>(&err), [&Code(101), &Code(100)]);
/// ```
pub fn get_all_error_info<'a, T: ErrorInfo>(err: &'a (dyn Error + 'static)) -> Vec<&'a T> {
    nodes(err)
        .filter_map(ChainError::error_info_as::<T>)
        .collect()
}

/// Returns the earliest attached metadata of type `T`, the one closest to the
/// root cause.
pub fn get_original_error_info<'a, T: ErrorInfo>(
    err: &'a (dyn Error + 'static),
) -> Option<&'a T> {
    nodes(err)
        .filter_map(ChainError::error_info_as::<T>)
        .last()
}

/// Returns the stack of the outermost chain node in `err`.
///
/// All nodes of a chain share one stack, so this is the snapshot taken where
/// the chain began.
pub fn get_stack<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Arc<Stack>> {
    nodes(err).next().map(ChainError::stack)
}

/// Returns the origin frame of the chain's stack: where the chain began.
pub fn get_stack_cause(err: &(dyn Error + 'static)) -> Option<Frame> {
    get_stack(err).and_then(|stack| stack.stack_source())
}

/// Returns the first error in the chain that is an `E`.
///
/// ```
/// use causa::{find, wrap};
/// use std::io;
///
/// let err = wrap(io::Error::new(io::ErrorKind::NotFound, "missing"));
/// assert_eq!(find::<io::Error>(&err).map(io::Error::kind), Some(io::ErrorKind::NotFound));
/// ```
pub fn find<'a, E: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a E> {
    chain(err).find_map(|e| e.downcast_ref::<E>())
}

/// Reports whether any error in the chain is an `E` equal to `target`.
pub fn is<E: Error + PartialEq + 'static>(err: &(dyn Error + 'static), target: &E) -> bool {
    chain(err).any(|e| e.downcast_ref::<E>() == Some(target))
}
