//! Copy-on-write stack.
//!
//! [`CowStack`] stores its elements behind an `Arc<Vec<T>>`. Cloning only
//! bumps the reference count; the first mutation of a stack whose storage
//! is shared detaches a private copy (`Arc::make_mut`). Reads never copy.
//!
//! Observable behaviour is identical to [`Stack`](crate::Stack): a clone
//! is an independent value. Only the timing of the copy differs.

use std::fmt;
use std::sync::Arc;

use stow_core::{LifoContainer, StackError};

use crate::config::StackConfig;
use crate::stack::Stack;

/// Stack with O(1) clone and deferred copy.
///
/// ```
/// use stow_stack::CowStack;
///
/// let original: CowStack<i32> = [1, 2].into_iter().collect();
/// let mut copy = original.clone();
/// assert!(original.is_shared());
///
/// copy.push(3);
/// assert!(!original.is_shared());
/// assert_eq!(original.count(), 2);
/// assert_eq!(copy.count(), 3);
/// ```
pub struct CowStack<T> {
    items: Arc<Vec<T>>,
}

impl<T> CowStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::with_config(StackConfig::default())
    }

    /// Create an empty stack, reserving `config.initial_capacity`.
    ///
    /// `shrink_on_clear` does not apply: `clear()` on a shared stack
    /// always starts from a fresh, unshared allocation.
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            items: Arc::new(Vec::with_capacity(config.initial_capacity)),
        }
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
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Whether this stack's storage is currently shared with a clone.
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.items) > 1
    }

    /// Whether both stacks point at the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Elements as a slice, bottom first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> CowStack<T> {
    /// Unique access to the storage, copying it first if shared.
    fn detach(&mut self) -> &mut Vec<T> {
        if self.is_shared() {
            log::trace!("detaching shared stack storage ({} elements)", self.items.len());
        }
        Arc::make_mut(&mut self.items)
    }

    /// Push an element onto the top. Copies shared storage first.
    pub fn push(&mut self, item: T) {
        self.detach().push(item);
    }

    /// Remove and return the top element.
    ///
    /// Returns [`StackError::Empty`] if the stack holds nothing. An empty
    /// pop never triggers a copy.
    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.items.is_empty() {
            log::debug!("pop on empty copy-on-write stack");
            return Err(StackError::Empty);
        }
        self.detach().pop().ok_or(StackError::Empty)
    }

    /// Remove every element.
    ///
    /// Shared storage is released rather than copied.
    pub fn clear(&mut self) {
        if self.is_shared() {
            self.items = Arc::new(Vec::new());
        } else {
            self.detach().clear();
        }
    }

    /// Copy the elements into a plain [`Stack`].
    pub fn to_stack(&self) -> Stack<T> {
        Stack::from(self.items.as_ref().clone())
    }
}

impl<T> Clone for CowStack<T> {
    /// O(1): shares storage with `self`.
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for CowStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for CowStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for CowStack<T> {}

impl<T: fmt::Debug> fmt::Debug for CowStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Clone> LifoContainer for CowStack<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        CowStack::push(self, item);
    }

    fn pop(&mut self) -> Result<T, StackError> {
        CowStack::pop(self)
    }

    fn count(&self) -> usize {
        CowStack::count(self)
    }

    fn peek(&self) -> Option<&T> {
        CowStack::peek(self)
    }
}

impl<T> From<Stack<T>> for CowStack<T> {
    fn from(stack: Stack<T>) -> Self {
        Self {
            items: Arc::new(stack.into_vec()),
        }
    }
}

impl<T> From<Vec<T>> for CowStack<T> {
    /// The last element of `items` becomes the top.
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}

impl<T> FromIterator<T> for CowStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
