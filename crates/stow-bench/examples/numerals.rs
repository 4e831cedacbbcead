//! End-to-end numeral stack example.
//!
//! Demonstrates: push four numerals → pop them back in reverse → copy a
//! value owner vs. alias a shared owner → linear search.

use stow_core::{find_index, StackError};
use stow_owner::{Record, SharedOwner, ValueOwner};
use stow_stack::Stack;

fn main() -> Result<(), StackError> {
    println!("=== stow numerals example ===\n");

    let mut stack = Stack::new();
    for word in ["uno", "dos", "tres", "cuatro"] {
        stack.push(word);
    }
    println!("pushed {} numerals", stack.count());
    while !stack.is_empty() {
        println!("  pop -> {}", stack.pop()?);
    }
    match stack.pop() {
        Err(StackError::Empty) => println!("  pop on empty -> {}", StackError::Empty),
        other => println!("  unexpected: {other:?}"),
    }

    println!("\nvalue owner:");
    let student: ValueOwner<&str> = ValueOwner::new(Record::new("Doan", "Da Nang"));
    let (original, copy) = student.copy_and_mutate(|c| c.set_property_a("Diep"));
    println!("  original = {}, copy = {}", original.record(), copy.record());

    println!("\nshared owner:");
    let student: SharedOwner<&str> = SharedOwner::new(Record::new("Doan", "Da Nang"));
    let (original, alias) = student.alias_and_mutate(|s| s.record.property_a = "Diep".into());
    println!(
        "  original = {}, alias = {}",
        original.property_a(),
        alias.property_a()
    );

    println!("\nsearch:");
    let strings = ["cat", "dog", "llama", "parakeet", "terrapin"];
    if let Some(idx) = find_index(&"llama", &strings) {
        println!("  index of llama is {idx}");
    }
    println!("  index of 9.3 is {:?}", find_index(&9.3, &[1.5, 0.1, 0.25]));

    Ok(())
}
