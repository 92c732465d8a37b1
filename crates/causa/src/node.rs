//! The chain node.

use core::any::Any;
use core::fmt;
use std::error::Error;
use std::sync::Arc;

use causa_trace::Stack;

use crate::error::BoxError;
use crate::info::ErrorInfo;
use crate::traverse::get_stack;

/// Frames between [`Stack::capture`] and the user's call site: [`attach`] and
/// the public entry point that called it.
const ATTACH_SKIP: usize = 2;

/// One link of an error chain.
///
/// A node holds the error it wraps (its cause), one [`ErrorInfo`] value and a
/// shared [`Stack`]. The stack is captured once per chain, by the first node
/// whose causes carry none, and every later wrap shares that same snapshot.
///
/// Nodes are immutable. [`source`](Error::source) exposes the cause, so std
/// chain walking and [`chain`](crate::chain) see through every node.
///
/// Equality is identity: a node equals only itself.
pub struct ChainError {
    cause: Option<BoxError>,
    info: Box<dyn ErrorInfo>,
    stack: Arc<Stack>,
}

impl ChainError {
    /// Creates a node with no cause and a freshly captured stack.
    ///
    /// The node renders as whatever `info` writes when given no cause.
    #[inline(never)]
    pub fn from_error_info<I: ErrorInfo>(info: I) -> Self {
        let stack = Arc::new(Stack::capture(1));
        Self {
            cause: None,
            info: Box::new(info),
            stack,
        }
    }

    /// Returns the metadata attached to this node.
    pub fn error_info(&self) -> &dyn ErrorInfo {
        &*self.info
    }

    /// Returns the metadata attached to this node if it is a `T`.
    pub fn error_info_as<T: ErrorInfo>(&self) -> Option<&T> {
        let info: &dyn Any = &*self.info;
        info.downcast_ref::<T>()
    }

    /// Returns the stack shared by this node's chain.
    pub const fn stack(&self) -> &Arc<Stack> {
        &self.stack
    }

    /// Consumes the node and returns the error it wraps.
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

/// Wraps `cause` in a new node carrying `info`.
///
/// Reuses the first stack found along `cause`'s chain; otherwise captures one
/// starting at the caller of the public entry point. Entry points must call
/// this directly and must not tail-call it.
#[inline(never)]
pub(crate) fn attach<I: ErrorInfo>(cause: BoxError, info: I) -> ChainError {
    let stack = match get_stack(&*cause) {
        Some(stack) => Arc::clone(stack),
        None => Arc::new(Stack::capture(ATTACH_SKIP)),
    };
    ChainError {
        cause: Some(cause),
        info: Box::new(info),
        stack,
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = self.cause.as_deref().map(|c| c as &(dyn Error + 'static));
        self.info.when_error(cause, f)
    }
}

impl fmt::Debug for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainError")
            .field("info", &self.info)
            .field("cause", &self.cause)
            .field("frames", &self.stack.len())
            .finish()
    }
}

impl Error for ChainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }
}

impl PartialEq for ChainError {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}
