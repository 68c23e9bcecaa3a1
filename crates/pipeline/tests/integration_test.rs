//! Integration tests for the pipeline.
//!
//! These tests run option derivation and the filter/sort engine together
//! over a realistic dataset and check the gallery's ordering guarantees.

use data_loader::{MovieRecord, parse_movies};
use pipeline::{FilterSortEngine, FilterState, Selection, SortMode, derive_filter_options};

fn create_test_dataset() -> Vec<MovieRecord> {
    let payload = br#"[
        {"title": "Iron Man", "release_date": "2008-05-02", "chronological_order": 3,
         "phase": "Phase 1", "main_character": "Iron Man"},
        {"title": "The Incredible Hulk", "release_date": "2008-06-13", "chronological_order": 5,
         "phase": "Phase 1", "main_character": "Hulk"},
        {"title": "Iron Man 2", "release_date": "2010-05-07", "chronological_order": 4,
         "phase": "Phase 1", "main_character": "Iron Man"},
        {"title": "Thor", "release_date": "2011-05-06", "chronological_order": 6,
         "phase": "Phase 1", "main_character": "Thor"},
        {"title": "Captain America: The First Avenger", "release_date": "2011-07-22",
         "chronological_order": 1, "phase": "Phase 1", "main_character": "Captain America"},
        {"title": "The Avengers", "release_date": "2012-05-04", "chronological_order": 7,
         "phase": "Phase 1"},
        {"title": "Iron Man 3", "release_date": "2013-05-03", "chronological_order": 8,
         "phase": "Phase 2", "main_character": "Iron Man"},
        {"title": "Thor: The Dark World", "release_date": "2013-11-08", "chronological_order": 9,
         "phase": "Phase 2", "main_character": "Thor"},
        {"title": "Captain Marvel", "release_date": "2019-03-08", "chronological_order": 2,
         "phase": "Phase 3", "main_character": "Captain Marvel"},
        {"title": "Thor: Ragnarok", "release_date": "2017-11-03", "chronological_order": 10,
         "phase": "Phase 3", "main_character": "Thor"}
    ]"#;
    parse_movies(payload, "fixture").unwrap()
}

/// Every combination of selections the controls can produce for a dataset
fn all_states(movies: &[MovieRecord]) -> Vec<FilterState> {
    let options = derive_filter_options(movies);
    let characters: Vec<Selection> = std::iter::once(Selection::All)
        .chain(options.characters.into_iter().map(Selection::Only))
        .collect();
    let phases: Vec<Selection> = std::iter::once(Selection::All)
        .chain(options.phases.into_iter().map(Selection::Only))
        .collect();

    let mut states = Vec::new();
    for sort_mode in [SortMode::Chronological, SortMode::ReleaseDate] {
        for character in &characters {
            for phase in &phases {
                states.push(FilterState {
                    sort_mode,
                    character: character.clone(),
                    phase: phase.clone(),
                });
            }
        }
    }
    states
}

#[test]
fn test_every_result_matches_selection() {
    let movies = create_test_dataset();
    let engine = FilterSortEngine::default();

    for state in all_states(&movies) {
        for movie in engine.apply(&movies, &state) {
            assert!(state.character.matches(movie.main_character.as_deref()));
            assert!(state.phase.matches(movie.phase.as_deref()));
        }
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let movies = create_test_dataset();
    let engine = FilterSortEngine::default();

    for state in all_states(&movies) {
        let first = engine.apply(&movies, &state);
        let second = engine.apply(&movies, &state);
        assert_eq!(first, second);
    }
}

#[test]
fn test_chronological_order_is_non_decreasing() {
    let movies = create_test_dataset();
    let engine = FilterSortEngine::default();

    for state in all_states(&movies)
        .into_iter()
        .filter(|s| s.sort_mode == SortMode::Chronological)
    {
        let result = engine.apply(&movies, &state);
        for pair in result.windows(2) {
            assert!(pair[0].chronological_order <= pair[1].chronological_order);
        }
    }
}

#[test]
fn test_release_dates_are_non_decreasing() {
    let movies = create_test_dataset();
    let engine = FilterSortEngine::default();

    for state in all_states(&movies)
        .into_iter()
        .filter(|s| s.sort_mode == SortMode::ReleaseDate)
    {
        let result = engine.apply(&movies, &state);
        for pair in result.windows(2) {
            assert!(pair[0].release_date.date() <= pair[1].release_date.date());
        }
    }
}

#[test]
fn test_option_sets_are_sorted_and_distinct() {
    let movies = create_test_dataset();
    let options = derive_filter_options(&movies);

    assert_eq!(
        options.characters,
        vec!["Captain America", "Captain Marvel", "Hulk", "Iron Man", "Thor"]
    );
    assert_eq!(options.phases, vec!["Phase 1", "Phase 2", "Phase 3"]);

    for labels in [&options.characters, &options.phases] {
        for pair in labels.windows(2) {
            assert!(pair[0] < pair[1], "labels must be strictly ascending");
        }
        assert!(labels.iter().all(|l| !l.is_empty()));
    }
}

#[test]
fn test_phase_selection_keeps_relative_order() {
    let movies = vec![
        MovieRecord::new("First", "2010-01-01").with_phase("Phase 1"),
        MovieRecord::new("Second", "2010-01-01").with_phase("Phase 2"),
        MovieRecord::new("Third", "2010-01-01").with_phase("Phase 1"),
    ];
    let state = FilterState {
        sort_mode: SortMode::ReleaseDate,
        phase: Selection::Only("Phase 1".to_string()),
        ..FilterState::default()
    };

    let result = FilterSortEngine::default().apply(&movies, &state);

    assert_eq!(result.len(), 2);
    assert!(std::ptr::eq(result[0], &movies[0]));
    assert!(std::ptr::eq(result[1], &movies[2]));
}

#[test]
fn test_chronological_sort_reorders_records() {
    let movies = vec![
        MovieRecord::new("Three", "2015-01-01").with_chronological_order(3),
        MovieRecord::new("One", "2016-01-01").with_chronological_order(1),
        MovieRecord::new("Two", "2017-01-01").with_chronological_order(2),
    ];

    let result = FilterSortEngine::default().apply(&movies, &FilterState::default());

    let orders: Vec<Option<i64>> = result.iter().map(|m| m.chronological_order).collect();
    assert_eq!(orders, vec![Some(1), Some(2), Some(3)]);
    assert!(std::ptr::eq(result[0], &movies[1]));
}

#[test]
fn test_equal_release_dates_keep_input_order() {
    let movies = vec![
        MovieRecord::new("The Avengers", "2012-05-04").with_chronological_order(7),
        MovieRecord::new("Iron Man", "2008-05-02").with_chronological_order(3),
        MovieRecord::new("Same Day Release", "2012-05-04").with_chronological_order(2),
    ];
    let state = FilterState {
        sort_mode: SortMode::ReleaseDate,
        ..FilterState::default()
    };

    let result = FilterSortEngine::default().apply(&movies, &state);

    let titles: Vec<&str> = result.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Iron Man", "The Avengers", "Same Day Release"]);
}

#[test]
fn test_unknown_selection_yields_nothing() {
    let movies = create_test_dataset();
    let state = FilterState::from_control_values("chronological", "Howard the Duck", "all");

    assert!(FilterSortEngine::default().apply(&movies, &state).is_empty());
}
