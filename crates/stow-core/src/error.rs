//! Error types for stow containers.
//!
//! Every container and owner in the workspace reports failures through
//! the single closed enum [`StackError`]. There is exactly one policy for
//! popping an empty container: the call returns [`StackError::Empty`].
//! Nothing in the library aborts the process on that path.

use std::error::Error;
use std::fmt;

/// Errors from container and owner operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackError {
    /// `pop` was called on a container holding no elements.
    ///
    /// Recoverable: check `count()` first, or handle the error.
    Empty,
    /// A shared owner was already mutably borrowed.
    ///
    /// Raised when a mutator tries to re-enter the owner it is mutating.
    Borrowed,
}

impl StackError {
    /// Whether this error reports an empty container.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pop on an empty container"),
            Self::Borrowed => write!(f, "shared owner is already mutably borrowed"),
        }
    }
}

impl Error for StackError {}
