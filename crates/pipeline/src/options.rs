//! Filter option sets derived from the dataset.
//!
//! Computed once after load; the dataset is static for the session, so
//! the option sets never change afterwards.

use data_loader::MovieRecord;
use std::collections::BTreeSet;

/// Distinct category labels offered by the character and phase controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Sorted ascending, no duplicates, no empty labels
    pub characters: Vec<String>,
    /// Sorted ascending, no duplicates, no empty labels
    pub phases: Vec<String>,
}

/// Collect the distinct `main_character` and `phase` labels.
///
/// Ordering is lexicographic on the label text (byte order, so "Phase 10"
/// comes before "Phase 2").
pub fn derive_filter_options(movies: &[MovieRecord]) -> FilterOptions {
    FilterOptions {
        characters: distinct_labels(movies.iter().map(|m| m.main_character.as_deref())),
        phases: distinct_labels(movies.iter().map(|m| m.phase.as_deref())),
    }
}

fn distinct_labels<'a>(labels: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    labels
        .flatten()
        .filter(|label| !label.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_filter_options() {
        let movies = vec![
            MovieRecord::new("Thor", "2011-05-06")
                .with_phase("Phase 1")
                .with_main_character("Thor"),
            MovieRecord::new("Iron Man", "2008-05-02")
                .with_phase("Phase 1")
                .with_main_character("Iron Man"),
            MovieRecord::new("Thor: Ragnarok", "2017-11-03")
                .with_phase("Phase 3")
                .with_main_character("Thor"),
            MovieRecord::new("The Avengers", "2012-05-04").with_phase("Phase 1"),
        ];

        let options = derive_filter_options(&movies);

        assert_eq!(options.characters, vec!["Iron Man", "Thor"]);
        assert_eq!(options.phases, vec!["Phase 1", "Phase 3"]);
    }

    #[test]
    fn test_empty_labels_are_excluded() {
        let mut movie = MovieRecord::new("Mystery", "2020-01-01");
        movie.phase = Some(String::new());

        let options = derive_filter_options(&[movie]);
        assert!(options.characters.is_empty());
        assert!(options.phases.is_empty());
    }

    #[test]
    fn test_lexicographic_order() {
        let movies = vec![
            MovieRecord::new("B", "2020-01-01").with_phase("Phase 2"),
            MovieRecord::new("A", "2020-01-01").with_phase("Phase 10"),
            MovieRecord::new("C", "2020-01-01").with_phase("Phase 1"),
        ];

        let options = derive_filter_options(&movies);
        assert_eq!(options.phases, vec!["Phase 1", "Phase 10", "Phase 2"]);
    }
}
