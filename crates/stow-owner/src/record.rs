//! The two-property record carried by both owners.

use std::fmt;

/// Two string properties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
    /// First property.
    pub property_a: String,
    /// Second property.
    pub property_b: String,
}

impl Record {
    /// Value written by [`make_anonymous`](Record::make_anonymous).
    pub const ANONYMOUS: &'static str = "Anonymous";

    /// Create a record from both properties.
    pub fn new(property_a: impl Into<String>, property_b: impl Into<String>) -> Self {
        Self {
            property_a: property_a.into(),
            property_b: property_b.into(),
        }
    }

    /// Replace `property_a` with [`Record::ANONYMOUS`].
    pub fn make_anonymous(&mut self) {
        self.property_a = Self::ANONYMOUS.to_string();
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.property_a, self.property_b)
    }
}
