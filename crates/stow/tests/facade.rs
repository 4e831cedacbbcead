//! End-to-end checks through the facade prelude.

use stow::prelude::*;
use stow_test_utils::{numerals, sample_library};

#[test]
fn numeral_scenario() {
    let mut stack = Stack::new();
    for n in numerals() {
        stack.push(n);
    }
    assert_eq!(stack.count(), 4);

    let popped: Vec<String> = (0..4).map(|_| stack.pop().unwrap()).collect();
    assert_eq!(popped, vec!["cuatro", "tres", "dos", "uno"]);
    assert_eq!(stack.count(), 0);
    assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn find_index_over_stack_contents() {
    let stack: Stack<String> = numerals().into_iter().collect();
    assert_eq!(find_index(&"tres".to_string(), stack.as_slice()), Some(2));
    assert_eq!(find_index(&"cinco".to_string(), stack.as_slice()), None);
}

#[test]
fn library_census() {
    let library = sample_library();
    assert_eq!(library.count_of(MediaKind::Movie), 2);
    assert_eq!(library.count_of(MediaKind::Song), 3);
    assert_eq!(library.census().values().sum::<usize>(), library.len());
}

#[test]
fn swap_through_prelude() {
    let mut a = Stack::from(vec![1]);
    let mut b = Stack::from(vec![2, 3]);
    swap_values(&mut a, &mut b);
    assert_eq!(a.count(), 2);
    assert_eq!(b.peek(), Some(&1));
}
