//! Core abstraction trait for last-in-first-out containers.

use crate::error::StackError;

/// A last-in-first-out container of `Self::Item`.
///
/// Implemented by every stack backing in `stow-stack` and by the mock
/// in `stow-test-utils`. Code that only needs push/pop semantics should
/// take `&mut impl LifoContainer` rather than a concrete stack type.
///
/// Implementations are not synchronised. Mutation goes through
/// `&mut self`, so concurrent use requires external exclusion by the
/// caller.
pub trait LifoContainer {
    /// Element type held by the container.
    type Item;

    /// Append an element at the top. Never fails.
    fn push(&mut self, item: Self::Item);

    /// Remove and return the most recently pushed element.
    ///
    /// Returns [`StackError::Empty`] if the container holds nothing.
    fn pop(&mut self) -> Result<Self::Item, StackError>;

    /// Current number of elements. O(1).
    fn count(&self) -> usize;

    /// The element that the next `pop` would return.
    fn peek(&self) -> Option<&Self::Item>;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `pop` for callers that treat emptiness as ordinary control flow.
    fn try_pop(&mut self) -> Option<Self::Item> {
        self.pop().ok()
    }

    /// Pop `n` elements, most recent first.
    ///
    /// All-or-nothing: if fewer than `n` elements are present, returns
    /// [`StackError::Empty`] and leaves the container untouched.
    fn pop_n(&mut self, n: usize) -> Result<Vec<Self::Item>, StackError> {
        if self.count() < n {
            return Err(StackError::Empty);
        }
        let mut popped = Vec::with_capacity(n);
        for _ in 0..n {
            popped.push(self.pop()?);
        }
        Ok(popped)
    }
}
