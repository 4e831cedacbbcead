//! Closed-variant media catalog.
//!
//! A library holds heterogeneous media items. Instead of checking and
//! downcasting at runtime, every item is one variant of [`MediaItem`],
//! and "is it a movie?" is a `match`. Kind-specific views
//! ([`MovieRef`], [`SongRef`]) are the checked-downcast equivalents.

use std::fmt;

use indexmap::IndexMap;

/// Discriminant of a [`MediaItem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaKind {
    /// A film with a director.
    Movie,
    /// A track with an artist.
    Song,
    /// Any other media item.
    Other,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Song => write!(f, "song"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One entry in a [`Library`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaItem {
    /// A film.
    Movie {
        /// Title.
        name: String,
        /// Director.
        director: String,
    },
    /// A track.
    Song {
        /// Title.
        name: String,
        /// Performing artist.
        artist: String,
    },
    /// A plain media item with only a name.
    Other {
        /// Title.
        name: String,
    },
}

/// Borrowed view of a [`MediaItem::Movie`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovieRef<'a> {
    /// Title.
    pub name: &'a str,
    /// Director.
    pub director: &'a str,
}

/// Borrowed view of a [`MediaItem::Song`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SongRef<'a> {
    /// Title.
    pub name: &'a str,
    /// Performing artist.
    pub artist: &'a str,
}

impl MediaItem {
    /// Build a movie entry.
    pub fn movie(name: impl Into<String>, director: impl Into<String>) -> Self {
        Self::Movie {
            name: name.into(),
            director: director.into(),
        }
    }

    /// Build a song entry.
    pub fn song(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::Song {
            name: name.into(),
            artist: artist.into(),
        }
    }

    /// Build a plain entry.
    pub fn other(name: impl Into<String>) -> Self {
        Self::Other { name: name.into() }
    }

    /// Title, regardless of kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Movie { name, .. } | Self::Song { name, .. } | Self::Other { name } => name,
        }
    }

    /// The item's kind.
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie { .. } => MediaKind::Movie,
            Self::Song { .. } => MediaKind::Song,
            Self::Other { .. } => MediaKind::Other,
        }
    }

    /// Whether this item is a movie.
    pub fn is_movie(&self) -> bool {
        self.kind() == MediaKind::Movie
    }

    /// Whether this item is a song.
    pub fn is_song(&self) -> bool {
        self.kind() == MediaKind::Song
    }

    /// Movie view, or `None` for other kinds.
    pub fn as_movie(&self) -> Option<MovieRef<'_>> {
        match self {
            Self::Movie { name, director } => Some(MovieRef { name, director }),
            _ => None,
        }
    }

    /// Song view, or `None` for other kinds.
    pub fn as_song(&self) -> Option<SongRef<'_>> {
        match self {
            Self::Song { name, artist } => Some(SongRef { name, artist }),
            _ => None,
        }
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie { name, director } => write!(f, "Movie: {name}, dir. {director}"),
            Self::Song { name, artist } => write!(f, "Song: {name}, by {artist}"),
            Self::Other { .. } => write!(f, "Media item"),
        }
    }
}

/// An ordered collection of media items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Library {
    items: Vec<MediaItem>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn push(&mut self, item: MediaItem) {
        self.items.push(item);
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the library holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Number of items of the given kind.
    pub fn count_of(&self, kind: MediaKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }

    /// Per-kind counts, keyed in the order each kind first appears.
    pub fn census(&self) -> IndexMap<MediaKind, usize> {
        let mut counts = IndexMap::new();
        for item in &self.items {
            *counts.entry(item.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Movie views in library order.
    pub fn movies(&self) -> impl Iterator<Item = MovieRef<'_>> {
        self.items.iter().filter_map(MediaItem::as_movie)
    }

    /// Song views in library order.
    pub fn songs(&self) -> impl Iterator<Item = SongRef<'_>> {
        self.items.iter().filter_map(MediaItem::as_song)
    }

    /// One display line per item.
    pub fn describe(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<MediaItem> for Library {
    fn from_iter<I: IntoIterator<Item = MediaItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Library {
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

    #[test]
    fn counts_by_kind() {
        let lib = sample();
        assert_eq!(lib.count_of(MediaKind::Movie), 2);
        assert_eq!(lib.count_of(MediaKind::Song), 3);
        assert_eq!(lib.count_of(MediaKind::Other), 1);
    }

    #[test]
    fn census_keeps_first_seen_order() {
        let census = sample().census();
        let keys: Vec<_> = census.keys().copied().collect();
        assert_eq!(keys, vec![MediaKind::Movie, MediaKind::Song, MediaKind::Other]);
        assert_eq!(census[&MediaKind::Song], 3);
    }

    #[test]
    fn checked_views() {
        let movie = MediaItem::movie("Ghostbusters", "Ivan Reitman");
        assert!(movie.is_movie());
        assert!(!movie.is_song());
        assert_eq!(movie.as_movie().unwrap().director, "Ivan Reitman");
        assert!(movie.as_song().is_none());
        assert!(MediaItem::other("x").as_movie().is_none());
    }

    #[test]
    fn describe_lines() {
        let lines = sample().describe();
        assert_eq!(lines[0], "Movie: Casablanca, dir. Michael Curtiz");
        assert_eq!(lines[1], "Song: Blue Suede Shoes, by Elvis Presley");
        assert_eq!(lines[5], "Media item");
    }

    #[test]
    fn movie_and_song_iterators() {
        let lib = sample();
        let movies: Vec<_> = lib.movies().map(|m| m.name).collect();
        assert_eq!(movies, vec!["Casablanca", "Citizen Kane"]);
        assert_eq!(lib.songs().count(), 3);
    }

    #[test]
    fn empty_library() {
        let lib = Library::new();
        assert!(lib.is_empty());
        assert!(lib.census().is_empty());
        assert_eq!(lib.movies().count(), 0);
    }
}
