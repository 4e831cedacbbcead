//! Reference-semantics owner.
//!
//! [`SharedOwner`] wraps its state in `Rc<RefCell<OwnerState<T>>>`.
//! `clone()` creates an alias: every handle reads and writes the same
//! state. Mutation goes through `&self`.
//!
//! The convenience accessors borrow the `RefCell` for the duration of the
//! call only. A mutator passed to [`SharedOwner::try_with_mut`] that tries
//! to reach the same state through another handle gets
//! [`StackError::Borrowed`] from the `try_*` methods.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use stow_core::StackError;
use stow_stack::{CowStack, Stack};

use crate::record::Record;
use crate::value::ValueOwner;

/// State shared by every alias of a [`SharedOwner`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnerState<T> {
    /// The record.
    pub record: Record,
    /// The item stack.
    pub items: Stack<T>,
}

/// Holder whose clones are aliases.
///
/// ```
/// use stow_owner::{Record, SharedOwner};
///
/// let original: SharedOwner<u8> = SharedOwner::new(Record::new("X", "b"));
/// let (original, alias) = original.alias_and_mutate(|s| s.record.property_a = "Y".into());
/// assert_eq!(original.property_a(), "Y");
/// assert!(original.ptr_eq(&alias));
/// ```
pub struct SharedOwner<T> {
    inner: Rc<RefCell<OwnerState<T>>>,
}

impl<T> SharedOwner<T> {
    /// Create an owner with an empty item stack.
    pub fn new(record: Record) -> Self {
        Self::from_state(OwnerState {
            record,
            items: Stack::new(),
        })
    }

    /// Create an owner from explicit state.
    pub fn from_state(state: OwnerState<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    /// Number of live handles (the original plus every alias).
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Whether both handles alias the same state.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `f` with shared access to the state.
    ///
    /// Returns [`StackError::Borrowed`] if the state is mutably borrowed.
    pub fn try_with<R>(&self, f: impl FnOnce(&OwnerState<T>) -> R) -> Result<R, StackError> {
        let state = self.inner.try_borrow().map_err(|_| StackError::Borrowed)?;
        Ok(f(&state))
    }

    /// Run `f` with exclusive access to the state.
    ///
    /// Returns [`StackError::Borrowed`] if the state is already borrowed.
    pub fn try_with_mut<R>(
        &self,
        f: impl FnOnce(&mut OwnerState<T>) -> R,
    ) -> Result<R, StackError> {
        let mut state = self
            .inner
            .try_borrow_mut()
            .map_err(|_| StackError::Borrowed)?;
        Ok(f(&mut state))
    }

    /// First property (cloned out of the shared state).
    ///
    /// # Panics
    ///
    /// Panics if called from inside a [`try_with_mut`](Self::try_with_mut)
    /// closure on the same state.
    pub fn property_a(&self) -> String {
        self.inner.borrow().record.property_a.clone()
    }

    /// Second property (cloned out of the shared state).
    ///
    /// # Panics
    ///
    /// Same conditions as [`property_a`](Self::property_a).
    pub fn property_b(&self) -> String {
        self.inner.borrow().record.property_b.clone()
    }

    /// Overwrite the first property. Visible through every alias.
    ///
    /// # Panics
    ///
    /// Panics if the state is already borrowed.
    pub fn set_property_a(&self, value: impl Into<String>) {
        self.inner.borrow_mut().record.property_a = value.into();
    }

    /// Overwrite the second property. Visible through every alias.
    ///
    /// # Panics
    ///
    /// Panics if the state is already borrowed.
    pub fn set_property_b(&self, value: impl Into<String>) {
        self.inner.borrow_mut().record.property_b = value.into();
    }

    /// Replace `property_a` with [`Record::ANONYMOUS`].
    ///
    /// Works through `&self`: an immutably bound handle can still change
    /// the shared state.
    ///
    /// # Panics
    ///
    /// Panics if the state is already borrowed.
    pub fn make_anonymous(&self) {
        self.inner.borrow_mut().record.make_anonymous();
    }

    /// Push onto the shared stack.
    ///
    /// # Panics
    ///
    /// Panics if the state is already borrowed.
    pub fn push(&self, item: T) {
        self.inner.borrow_mut().items.push(item);
    }

    /// Pop from the shared stack.
    ///
    /// Returns [`StackError::Empty`] if there are no items, or
    /// [`StackError::Borrowed`] if the state is already borrowed.
    pub fn pop(&self) -> Result<T, StackError> {
        self.try_with_mut(|state| state.items.pop())?
    }

    /// Number of items on the shared stack.
    ///
    /// # Panics
    ///
    /// Panics if the state is mutably borrowed.
    pub fn count(&self) -> usize {
        self.inner.borrow().items.count()
    }

    /// Create an alias, apply `mutator` through it, and return
    /// `(original, alias)`.
    ///
    /// Both handles in the returned pair observe the mutation.
    ///
    /// # Panics
    ///
    /// Panics if the state is already borrowed; use
    /// [`try_alias_and_mutate`](Self::try_alias_and_mutate) to get an
    /// error instead.
    pub fn alias_and_mutate<F>(&self, mutator: F) -> (Self, Self)
    where
        F: FnOnce(&mut OwnerState<T>),
    {
        let alias = self.clone();
        log::trace!("mutating through alias ({} handles)", alias.handle_count());
        mutator(&mut alias.inner.borrow_mut());
        (self.clone(), alias)
    }

    /// Fallible [`alias_and_mutate`](Self::alias_and_mutate).
    ///
    /// Returns [`StackError::Borrowed`] without running `mutator` if the
    /// state is already borrowed.
    pub fn try_alias_and_mutate<F>(&self, mutator: F) -> Result<(Self, Self), StackError>
    where
        F: FnOnce(&mut OwnerState<T>),
    {
        let alias = self.clone();
        log::trace!("mutating through alias ({} handles)", alias.handle_count());
        alias.try_with_mut(mutator)?;
        Ok((self.clone(), alias))
    }
}

impl<T: Clone> SharedOwner<T> {
    /// Detach a value copy of the current state.
    ///
    /// Later mutations through any alias do not reach the returned owner.
    pub fn snapshot(&self) -> Result<ValueOwner<T>, StackError> {
        self.try_with(|state| {
            ValueOwner::with_items(
                state.record.clone(),
                CowStack::from(state.items.clone()),
            )
        })
    }
}

impl<T: Clone> From<ValueOwner<T>> for SharedOwner<T> {
    fn from(owner: ValueOwner<T>) -> Self {
        Self::from_state(OwnerState {
            record: owner.record().clone(),
            items: owner.items().to_stack(),
        })
    }
}

impl<T> Clone for SharedOwner<T> {
    /// Creates an alias, not a copy.
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedOwner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(state) => f
                .debug_struct("SharedOwner")
                .field("handles", &self.handle_count())
                .field("state", &*state)
                .finish(),
            Err(_) => f
                .debug_struct("SharedOwner")
                .field("handles", &self.handle_count())
                .field("state", &"<borrowed>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> SharedOwner<String> {
        SharedOwner::new(Record::new("X", "Da Nang"))
    }

    #[test]
    fn alias_sees_property_writes() {
        let (original, alias) = owner().alias_and_mutate(|s| s.record.property_a = "Y".into());
        assert_eq!(original.property_a(), "Y");
        assert_eq!(alias.property_a(), "Y");
        assert!(original.ptr_eq(&alias));
    }

    #[test]
    fn alias_sees_item_writes() {
        let (original, alias) = owner().alias_and_mutate(|s| {
            s.items.push("uno".into());
            s.items.push("dos".into());
        });
        assert_eq!(original.count(), 2);
        assert_eq!(alias.pop(), Ok("dos".to_string()));
        assert_eq!(original.count(), 1);
    }

    #[test]
    fn plain_assignment_aliases() {
        let original = owner();
        let alias = original.clone();
        alias.set_property_a("Diep");
        assert_eq!(original.property_a(), "Diep");
        assert_eq!(original.handle_count(), 2);
        drop(alias);
        assert_eq!(original.handle_count(), 1);
    }

    #[test]
    fn immutable_binding_can_still_mutate() {
        let person = owner();
        person.make_anonymous();
        assert_eq!(person.property_a(), Record::ANONYMOUS);
    }

    #[test]
    fn reentrant_access_reports_borrowed() {
        let original = owner();
        let alias = original.clone();
        let inner = original
            .try_with_mut(|_state| alias.try_with(|s| s.record.property_a.clone()))
            .unwrap();
        assert_eq!(inner, Err(StackError::Borrowed));

        let inner_pop = original.try_with_mut(|_state| alias.pop()).unwrap();
        assert_eq!(inner_pop, Err(StackError::Borrowed));
    }

    #[test]
    fn try_alias_and_mutate_when_free() {
        let (original, alias) = owner()
            .try_alias_and_mutate(|s| s.items.push("uno".into()))
            .unwrap();
        assert!(original.ptr_eq(&alias));
        assert_eq!(original.count(), 1);
    }

    #[test]
    fn reentrant_alias_reports_borrowed() {
        let original = owner();
        let alias = original.clone();
        let inner = original
            .try_with_mut(|_state| {
                alias
                    .try_alias_and_mutate(|s| s.record.property_a = "Y".into())
                    .map(|_| ())
            })
            .unwrap();
        assert_eq!(inner, Err(StackError::Borrowed));
        assert_eq!(original.property_a(), "X");
    }

    #[test]
    #[should_panic]
    fn reentrant_alias_and_mutate_panics() {
        let original = owner();
        let alias = original.clone();
        let _ = original.try_with_mut(|_state| {
            alias.alias_and_mutate(|s| s.record.property_a = "Y".into());
        });
    }

    #[test]
    fn pop_on_empty_shared() {
        assert_eq!(owner().pop(), Err(StackError::Empty));
    }

    #[test]
    fn snapshot_detaches() {
        let original = owner();
        original.push("uno".into());
        let snap = original.snapshot().unwrap();
        original.set_property_a("Y");
        original.push("dos".into());
        assert_eq!(snap.property_a(), "X");
        assert_eq!(snap.count(), 1);
        assert_eq!(original.count(), 2);
    }

    #[test]
    fn from_value_owner_copies_state() {
        let mut value: ValueOwner<u8> = ValueOwner::new(Record::new("a", "b"));
        value.push(1);
        let shared = SharedOwner::from(value.clone());
        shared.push(2);
        assert_eq!(value.count(), 1);
        assert_eq!(shared.count(), 2);
        assert_eq!(shared.property_b(), "b");
    }

    #[test]
    fn debug_while_borrowed() {
        let original = owner();
        let alias = original.clone();
        let rendered = original
            .try_with_mut(|_state| format!("{alias:?}"))
            .unwrap();
        assert!(rendered.contains("<borrowed>"));
        assert!(format!("{original:?}").contains("Da Nang"));
    }
}
