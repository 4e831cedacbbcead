//! Core types and traits for the stow containers.
//!
//! This is the leaf crate with no internal dependencies. It defines
//! the abstractions shared across the stow workspace: the container
//! error type, the [`LifoContainer`] trait, equality-constrained search
//! helpers, and the closed-variant media catalog.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod media;
pub mod search;
pub mod traits;

pub use error::StackError;
pub use media::{Library, MediaItem, MediaKind, MovieRef, SongRef};
pub use search::{find_index, find_index_by, swap_values};
pub use traits::LifoContainer;
