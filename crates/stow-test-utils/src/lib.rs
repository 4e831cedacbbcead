//! Test utilities and mock containers for stow development.
//!
//! Provides a mock implementation of [`LifoContainer`] that records every
//! operation, the numeral fixtures used across the scenario tests, and a
//! one-call logger setup for tests that want to see `log` output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{numerals, sample_library, NUMERALS};

use stow_core::{LifoContainer, StackError};

/// Install `env_logger` for the current test binary.
///
/// Safe to call from every test: repeated calls are no-ops. Output is
/// captured by the test harness and filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One operation observed by a [`RecordingStack`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Push,
    Pop,
    /// `pop` on an empty stack.
    EmptyPop,
}

/// Mock [`LifoContainer`] that logs every call.
///
/// Backed by a plain `Vec<T>`. Inspect the call history with
/// [`ops`](RecordingStack::ops) after passing it to code under test.
pub struct RecordingStack<T> {
    items: Vec<T>,
    ops: Vec<Op>,
}

impl<T> RecordingStack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Pre-populate without recording.
    pub fn seeded(items: Vec<T>) -> Self {
        Self {
            items,
            ops: Vec::new(),
        }
    }

    /// Recorded operations in call order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of recorded operations equal to `op`.
    pub fn calls(&self, op: &Op) -> usize {
        self.ops.iter().filter(|o| *o == op).count()
    }
}

impl<T> Default for RecordingStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LifoContainer for RecordingStack<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        self.ops.push(Op::Push);
        self.items.push(item);
    }

    fn pop(&mut self) -> Result<T, StackError> {
        match self.items.pop() {
            Some(item) => {
                self.ops.push(Op::Pop);
                Ok(item)
            }
            None => {
                log::debug!("recording stack: pop on empty");
                self.ops.push(Op::EmptyPop);
                Err(StackError::Empty)
            }
        }
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}
