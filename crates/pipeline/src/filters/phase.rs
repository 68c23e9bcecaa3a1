//! Filter to keep only movies from the selected phase.

use crate::state::FilterState;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies whose `phase` equals the phase selection exactly.
pub struct PhaseFilter;

impl Filter for PhaseFilter {
    fn name(&self) -> &str {
        "PhaseFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, state: &FilterState) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| state.phase.matches(movie.phase.as_deref()))
            .collect()
    }
}
