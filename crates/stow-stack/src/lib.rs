//! Generic last-in-first-out containers.
//!
//! Three backings share the [`LifoContainer`](stow_core::LifoContainer)
//! contract and the same empty-pop policy ([`StackError::Empty`]):
//!
//! ```text
//! Stack<T>          Vec<T>            plain heap-backed stack
//! InlineStack<A>    SmallVec<A>       inline until A::size() elements, then spills
//! CowStack<T>       Arc<Vec<T>>       O(1) clone, copies on first mutation
//! ```
//!
//! # Value semantics
//!
//! All three are value types: `clone()` yields a stack whose later
//! mutations never show through the original. `CowStack` defers the
//! actual copy until one side mutates.
//!
//! # Concurrency
//!
//! None of these types synchronise internally. Mutation takes `&mut self`;
//! callers sharing a stack across threads must provide their own exclusion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cow;
pub mod inline;
pub mod stack;

pub use config::StackConfig;
pub use cow::CowStack;
pub use inline::InlineStack;
pub use stack::{DrainLifo, Stack};
pub use stow_core::{LifoContainer, StackError};
