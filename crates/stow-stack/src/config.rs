//! Stack configuration parameters.

/// Configuration for heap-backed stacks.
///
/// Fixed when the stack is built; there is no way to change it on a
/// live stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackConfig {
    /// Number of elements to reserve up front.
    ///
    /// Default: 0 (allocate on first push).
    pub initial_capacity: usize,

    /// Whether `clear()` releases the backing allocation.
    ///
    /// Default: false. When false, a cleared stack keeps its capacity
    /// for reuse.
    pub shrink_on_clear: bool,
}

impl StackConfig {
    /// Default reserved capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Default clear behaviour.
    pub const DEFAULT_SHRINK_ON_CLEAR: bool = false;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            shrink_on_clear: Self::DEFAULT_SHRINK_ON_CLEAR,
        }
    }

    /// Set the reserved capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set whether `clear()` releases memory.
    pub fn with_shrink_on_clear(mut self, shrink_on_clear: bool) -> Self {
        self.shrink_on_clear = shrink_on_clear;
        self
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new()
    }
}
