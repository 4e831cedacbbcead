//! Small-buffer stack.
//!
//! [`InlineStack`] keeps up to `A::size()` elements inline (no heap
//! allocation) and spills to the heap transparently beyond that. Useful
//! for short-lived stacks whose depth is usually small, such as bracket
//! matching or undo trails.

use std::fmt;

use smallvec::{Array, SmallVec};
use stow_core::{LifoContainer, StackError};

/// Stack over `SmallVec<A>`.
///
/// ```
/// use stow_stack::InlineStack;
///
/// let mut stack: InlineStack<[u32; 4]> = InlineStack::new();
/// stack.push(1);
/// assert!(!stack.spilled());
/// ```
pub struct InlineStack<A: Array> {
    items: SmallVec<A>,
}

impl<A: Array> InlineStack<A> {
    /// Create an empty inline stack.
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    /// Number of elements held before spilling to the heap.
    pub fn inline_capacity(&self) -> usize {
        A::size()
    }

    /// Whether the elements currently live on the heap.
    pub fn spilled(&self) -> bool {
        self.items.spilled()
    }

    /// Push an element onto the top.
    pub fn push(&mut self, item: A::Item) {
        let was_inline = !self.items.spilled();
        self.items.push(item);
        if was_inline && self.items.spilled() {
            log::trace!(
                "inline stack spilled to heap at {} elements",
                self.items.len()
            );
        }
    }

    /// Remove and return the top element.
    ///
    /// Returns [`StackError::Empty`] if the stack holds nothing.
    pub fn pop(&mut self) -> Result<A::Item, StackError> {
        self.items.pop().ok_or_else(|| {
            log::debug!("pop on empty inline stack");
            StackError::Empty
        })
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The top element.
    pub fn peek(&self) -> Option<&A::Item> {
        self.items.last()
    }

    /// Remove every element. Heap storage, if any, is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Elements as a slice, bottom first.
    pub fn as_slice(&self) -> &[A::Item] {
        &self.items
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, A::Item> {
        self.items.iter()
    }
}

impl<A: Array> Clone for InlineStack<A>
where
    A::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<A: Array> Default for InlineStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Array> fmt::Debug for InlineStack<A>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<A: Array> PartialEq for InlineStack<A>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<A: Array> LifoContainer for InlineStack<A> {
    type Item = A::Item;

    fn push(&mut self, item: A::Item) {
        InlineStack::push(self, item);
    }

    fn pop(&mut self) -> Result<A::Item, StackError> {
        InlineStack::pop(self)
    }

    fn count(&self) -> usize {
        InlineStack::count(self)
    }

    fn peek(&self) -> Option<&A::Item> {
        InlineStack::peek(self)
    }
}

impl<A: Array> FromIterator<A::Item> for InlineStack<A> {
    fn from_iter<I: IntoIterator<Item = A::Item>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<A: Array> Extend<A::Item> for InlineStack<A> {
    fn extend<I: IntoIterator<Item = A::Item>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
