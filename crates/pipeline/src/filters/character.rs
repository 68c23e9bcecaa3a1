//! Filter to keep only movies led by the selected character.

use crate::state::FilterState;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies whose `main_character` equals the character selection.
///
/// ## Algorithm
/// 1. If the selection is "all", return the input unchanged
/// 2. Otherwise keep records whose main character matches exactly
///    (case-sensitive); records without a main character are dropped
pub struct CharacterFilter;

impl Filter for CharacterFilter {
    fn name(&self) -> &str {
        "CharacterFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, state: &FilterState) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| state.character.matches(movie.main_character.as_deref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Selection;

    fn create_test_movies() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Iron Man", "2008-05-02").with_main_character("Iron Man"),
            MovieRecord::new("Thor", "2011-05-06").with_main_character("Thor"),
            MovieRecord::new("Iron Man 2", "2010-05-07").with_main_character("Iron Man"),
            MovieRecord::new("The Avengers", "2012-05-04"),
        ]
    }

    #[test]
    fn test_character_filter() {
        let movies = create_test_movies();
        let state = FilterState {
            character: Selection::Only("Iron Man".to_string()),
            ..FilterState::default()
        };

        let filtered = CharacterFilter.apply(movies.iter().collect(), &state);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Iron Man");
        assert_eq!(filtered[1].title, "Iron Man 2");
    }

    #[test]
    fn test_character_filter_is_case_sensitive() {
        let movies = create_test_movies();
        let state = FilterState {
            character: Selection::Only("iron man".to_string()),
            ..FilterState::default()
        };

        assert!(CharacterFilter.apply(movies.iter().collect(), &state).is_empty());
    }

    #[test]
    fn test_character_filter_all() {
        let movies = create_test_movies();
        let filtered = CharacterFilter.apply(movies.iter().collect(), &FilterState::default());

        // Records without a main character are kept when nothing is selected
        assert_eq!(filtered.len(), 4);
    }
}
