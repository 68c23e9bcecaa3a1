//! Comparators for the two gallery orderings.
//!
//! Both orderings are total orders so they can be handed to the standard
//! library's stable sort. Records with a missing key (no chronological
//! order, or a release date that did not parse) sort after every record
//! with a key and keep their relative order among themselves.

use crate::state::SortMode;
use data_loader::MovieRecord;
use std::cmp::Ordering;

/// Ascending by `chronological_order`
pub fn compare_chronological(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    missing_last(a.chronological_order, b.chronological_order)
}

/// Ascending by calendar release date. No secondary key.
pub fn compare_release_date(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    missing_last(a.release_date.date(), b.release_date.date())
}

/// Stable in-place sort of a working list
pub fn sort_movies(movies: &mut [&MovieRecord], mode: SortMode) {
    match mode {
        SortMode::Chronological => movies.sort_by(|a, b| compare_chronological(a, b)),
        SortMode::ReleaseDate => movies.sort_by(|a, b| compare_release_date(a, b)),
    }
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
