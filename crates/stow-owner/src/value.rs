//! Value-semantics owner.
//!
//! [`ValueOwner`] holds its items in a [`CowStack`], so `clone()` is cheap
//! and the actual copy happens on the first push or pop of either side.

use stow_core::StackError;
use stow_stack::CowStack;

use crate::record::Record;

/// Holder whose clones are independent values.
///
/// ```
/// use stow_owner::{Record, ValueOwner};
///
/// let original: ValueOwner<u8> = ValueOwner::new(Record::new("X", "b"));
/// let (original, copy) = original.copy_and_mutate(|c| c.set_property_a("Y"));
/// assert_eq!(original.property_a(), "X");
/// assert_eq!(copy.property_a(), "Y");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValueOwner<T> {
    record: Record,
    items: CowStack<T>,
}

impl<T> ValueOwner<T> {
    /// Create an owner with an empty item stack.
    pub fn new(record: Record) -> Self {
        Self::with_items(record, CowStack::new())
    }

    /// Create an owner with pre-populated items.
    pub fn with_items(record: Record, items: CowStack<T>) -> Self {
        Self { record, items }
    }

    /// The owned record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// First property.
    pub fn property_a(&self) -> &str {
        &self.record.property_a
    }

    /// Second property.
    pub fn property_b(&self) -> &str {
        &self.record.property_b
    }

    /// Overwrite the first property.
    pub fn set_property_a(&mut self, value: impl Into<String>) {
        self.record.property_a = value.into();
    }

    /// Overwrite the second property.
    pub fn set_property_b(&mut self, value: impl Into<String>) {
        self.record.property_b = value.into();
    }

    /// Replace `property_a` with [`Record::ANONYMOUS`].
    ///
    /// Needs `&mut self`: a value owner bound immutably cannot change.
    pub fn make_anonymous(&mut self) {
        self.record.make_anonymous();
    }

    /// The owned items.
    pub fn items(&self) -> &CowStack<T> {
        &self.items
    }

    /// Number of owned items.
    pub fn count(&self) -> usize {
        self.items.count()
    }

    /// Whether `self` and `other` still share item storage.
    pub fn shares_items_with(&self, other: &Self) -> bool {
        self.items.ptr_eq(&other.items)
    }
}

impl<T: Clone> ValueOwner<T> {
    /// Push onto the owned stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pop from the owned stack.
    ///
    /// Returns [`StackError::Empty`] if there are no items.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop()
    }

    /// Produce a copy, apply `mutator` to it, and return
    /// `(original, copy)`.
    ///
    /// The original in the returned pair is unaffected by anything
    /// `mutator` does.
    pub fn copy_and_mutate<F>(&self, mutator: F) -> (Self, Self)
    where
        F: FnOnce(&mut Self),
    {
        let original = self.clone();
        let mut copy = self.clone();
        mutator(&mut copy);
        if !original.shares_items_with(&copy) {
            log::trace!("copy detached item storage ({} items)", copy.count());
        }
        (original, copy)
    }
}
