//! Equality-constrained linear search and generic swap.
//!
//! [`find_index`] requires `T: PartialEq`; passing an element type without
//! equality is rejected by the compiler, so there is no runtime
//! "type constraint violated" path.

/// Index of the first element equal to `target`, scanning left to right.
///
/// Returns `None` when no element matches. Stops at the first match.
///
/// ```
/// use stow_core::find_index;
///
/// assert_eq!(find_index(&3, &[1, 2, 3, 4]), Some(2));
/// assert_eq!(find_index(&9, &[1, 2, 3, 4]), None);
/// ```
pub fn find_index<T: PartialEq>(target: &T, sequence: &[T]) -> Option<usize> {
    for (index, value) in sequence.iter().enumerate() {
        if value == target {
            return Some(index);
        }
    }
    None
}

/// Index of the first element satisfying `predicate`.
pub fn find_index_by<T, F>(sequence: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    sequence.iter().position(|value| predicate(value))
}

/// Exchange two values of the same type in place.
pub fn swap_values<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}
