//! Heap-backed generic stack.
//!
//! [`Stack`] is a `Vec<T>` that only grows and shrinks at the tail.
//! `count()` is O(1); `push` never fails; `pop` on an empty stack returns
//! [`StackError::Empty`].

use std::fmt;

use stow_core::{LifoContainer, StackError};

use crate::config::StackConfig;

/// Last-in-first-out container of `T`.
///
/// A value type: `clone()` produces an independent stack.
///
/// ```
/// use stow_stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push("uno");
/// stack.push("dos");
/// assert_eq!(stack.pop(), Ok("dos"));
/// assert_eq!(stack.count(), 1);
/// ```
#[derive(Clone)]
pub struct Stack<T> {
    /// Bottom of the stack at index 0, top at the end.
    items: Vec<T>,
    shrink_on_clear: bool,
}

impl<T> Stack<T> {
    /// Create an empty stack with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StackConfig::default())
    }

    /// Create an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StackConfig::new().with_initial_capacity(capacity))
    }

    /// Create an empty stack from an explicit configuration.
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
            shrink_on_clear: config.shrink_on_clear,
        }
    }

    /// Push an element onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element.
    ///
    /// Returns [`StackError::Empty`] if the stack holds nothing.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or_else(|| {
            log::debug!("pop on empty stack");
            StackError::Empty
        })
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`count`](Stack::count).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The top element.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutable access to the top element.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Elements the stack can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
        if self.shrink_on_clear {
            self.items.shrink_to_fit();
        }
    }

    /// Iterate from bottom to top without consuming.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Elements as a slice, bottom first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the stack, returning elements bottom first.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Pop every element, top first, through an iterator.
    ///
    /// Elements not consumed before the iterator is dropped stay on the
    /// stack.
    pub fn drain_lifo(&mut self) -> DrainLifo<'_, T> {
        DrainLifo { stack: self }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> LifoContainer for Stack<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        Stack::push(self, item);
    }

    fn pop(&mut self) -> Result<T, StackError> {
        Stack::pop(self)
    }

    fn count(&self) -> usize {
        Stack::count(self)
    }

    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of `items` becomes the top.
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            shrink_on_clear: StackConfig::DEFAULT_SHRINK_ON_CLEAR,
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    /// Yields elements in pop order (top first).
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Iterator returned by [`Stack::drain_lifo`].
pub struct DrainLifo<'a, T> {
    stack: &'a mut Stack<T>,
}

impl<T> Iterator for DrainLifo<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stack.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.stack.items.len();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for DrainLifo<'_, T> {}
