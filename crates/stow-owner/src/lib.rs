//! Value-owned and shared-owned record holders.
//!
//! Two holders with the same shape (a [`Record`] of two string
//! properties plus a stack of items) and opposite assignment semantics:
//!
//! | Holder | `clone()` gives | Mutation through the clone |
//! |--------|-----------------|----------------------------|
//! | [`ValueOwner`] | independent copy (copy-on-write) | invisible to the original |
//! | [`SharedOwner`] | alias (`Rc<RefCell<_>>`) | visible through the original |
//!
//! [`ValueOwner::copy_and_mutate`] and [`SharedOwner::alias_and_mutate`]
//! return `(original, other)` pairs so the divergence can be asserted
//! directly.
//!
//! # Concurrency
//!
//! `SharedOwner` is neither `Send` nor `Sync`, so the single-writer
//! discipline is enforced by the compiler. `ValueOwner` mutates through
//! `&mut self` and needs external exclusion if shared across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod record;
pub mod shared;
pub mod value;

pub use record::Record;
pub use shared::{OwnerState, SharedOwner};
pub use value::ValueOwner;
