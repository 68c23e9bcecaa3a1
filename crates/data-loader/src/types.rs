//! Core domain types for the movie gallery.
//!
//! A `MovieRecord` is one entry of the dataset; a `Dataset` is the ordered,
//! read-only collection produced by a single load.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

// =============================================================================
// Release Dates
// =============================================================================

/// A release date as written in the dataset, plus its calendar value if it
/// could be parsed.
///
/// The raw text is kept so an invalid date can still be reported as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDate {
    raw: String,
    date: Option<NaiveDate>,
}

impl ReleaseDate {
    /// Parse an ISO date (`2008-05-02`), an RFC 3339 timestamp or a naive
    /// `YYYY-MM-DDTHH:MM:SS` timestamp. Anything else is an invalid date.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                    .ok()
                    .map(|dt| dt.date())
            });

        Self {
            raw: raw.to_string(),
            date,
        }
    }

    /// A release date that was absent from the record
    pub fn missing() -> Self {
        Self {
            raw: String::new(),
            date: None,
        }
    }

    /// The calendar date, or `None` for an invalid/missing date
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_valid(&self) -> bool {
        self.date.is_some()
    }
}

impl From<NaiveDate> for ReleaseDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            raw: date.format("%Y-%m-%d").to_string(),
            date: Some(date),
        }
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

// =============================================================================
// Movie Records
// =============================================================================

/// One entry of the movie dataset.
///
/// Only `title` and `release_date` are always present; every other field is
/// `None` when it was missing, empty or of the wrong JSON type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub title: String,
    pub release_date: ReleaseDate,
    /// In-story position, unique within a dataset
    pub chronological_order: Option<i64>,
    pub phase: Option<String>,
    pub main_character: Option<String>,
    pub poster_url: Option<String>,
}

impl MovieRecord {
    /// Create a record with the required fields only
    pub fn new(title: impl Into<String>, release_date: &str) -> Self {
        Self {
            title: title.into(),
            release_date: ReleaseDate::parse(release_date),
            chronological_order: None,
            phase: None,
            main_character: None,
            poster_url: None,
        }
    }

    pub fn with_chronological_order(mut self, order: i64) -> Self {
        self.chronological_order = Some(order);
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn with_main_character(mut self, character: impl Into<String>) -> Self {
        self.main_character = Some(character.into());
        self
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }
}

// =============================================================================
// Dataset - The Loaded Collection
// =============================================================================

/// The in-memory movie collection for one session.
///
/// Records keep the order of the source payload. There are no mutators: a
/// dataset is built once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub(crate) source_name: String,
    pub(crate) movies: Vec<MovieRecord>,
}

impl Dataset {
    /// Wrap already-parsed records
    pub fn new(source_name: impl Into<String>, movies: Vec<MovieRecord>) -> Self {
        Self {
            source_name: source_name.into(),
            movies,
        }
    }

    /// Where this dataset was loaded from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// All records, in source order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
