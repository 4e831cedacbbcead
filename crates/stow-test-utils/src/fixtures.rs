//! Reusable data fixtures.
//!
//! - [`NUMERALS`]: the four-element push/pop scenario.
//! - [`sample_library`]: a mixed media library with 2 movies, 3 songs
//!   and 1 plain item.

use stow_core::{Library, MediaItem};

/// Spanish numerals one to four, in push order.
pub const NUMERALS: [&str; 4] = ["uno", "dos", "tres", "cuatro"];

/// [`NUMERALS`] as owned strings.
pub fn numerals() -> Vec<String> {
    NUMERALS.iter().map(|s| s.to_string()).collect()
}

/// Mixed library used by catalog tests.
pub fn sample_library() -> Library {
    [
        MediaItem::movie("Casablanca", "Michael Curtiz"),
        MediaItem::song("Blue Suede Shoes", "Elvis Presley"),
        MediaItem::movie("Citizen Kane", "Orson Welles"),
        MediaItem::song("The One And Only", "Chesney Hawkes"),
        MediaItem::song("Never Gonna Give You Up", "Rick Astley"),
        MediaItem::other("MediaItem"),
    ]
    .into_iter()
    .collect()
}
