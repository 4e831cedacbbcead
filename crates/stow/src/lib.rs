//! Stow: typed LIFO containers with explicit value and reference ownership.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the stow sub-crates. For most users, adding `stow` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stow::prelude::*;
//!
//! let mut stack = Stack::new();
//! for word in ["uno", "dos", "tres", "cuatro"] {
//!     stack.push(word);
//! }
//! assert_eq!(stack.count(), 4);
//! assert_eq!(stack.pop(), Ok("cuatro"));
//!
//! // Empty pops are errors, never sentinels.
//! let mut empty: Stack<u8> = Stack::new();
//! assert_eq!(empty.pop(), Err(StackError::Empty));
//!
//! // Value owners copy; shared owners alias.
//! let value: ValueOwner<u8> = ValueOwner::new(Record::new("X", "b"));
//! let (original, _copy) = value.copy_and_mutate(|c| c.set_property_a("Y"));
//! assert_eq!(original.property_a(), "X");
//!
//! let shared: SharedOwner<u8> = SharedOwner::new(Record::new("X", "b"));
//! let (original, _alias) = shared.alias_and_mutate(|s| s.record.property_a = "Y".into());
//! assert_eq!(original.property_a(), "Y");
//!
//! assert_eq!(find_index(&3, &[1, 2, 3, 4]), Some(2));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stow-core` | `StackError`, `LifoContainer`, search helpers, media catalog |
//! | [`stack`] | `stow-stack` | `Stack`, `InlineStack`, `CowStack`, `StackConfig` |
//! | [`owner`] | `stow-owner` | `Record`, `ValueOwner`, `SharedOwner` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core error type, container trait and search helpers (`stow-core`).
pub use stow_core as types;

/// Stack backings and configuration (`stow-stack`).
pub use stow_stack as stack;

/// Value and shared owners (`stow-owner`).
pub use stow_owner as owner;

/// Common imports for typical stow usage.
///
/// ```rust
/// use stow::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use stow_core::{find_index, find_index_by, swap_values, LifoContainer, StackError};

    // Catalog
    pub use stow_core::{Library, MediaItem, MediaKind};

    // Stacks
    pub use stow_stack::{CowStack, InlineStack, Stack, StackConfig};

    // Owners
    pub use stow_owner::{OwnerState, Record, SharedOwner, ValueOwner};
}
