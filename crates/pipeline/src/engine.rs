//! The filter/sort engine.
//!
//! Given the full dataset and the current `FilterState`, produce the ordered
//! subset to display. The dataset is only borrowed; the result is a fresh
//! list of references into it.

use crate::filter_pipeline::FilterPipeline;
use crate::sort::sort_movies;
use crate::state::FilterState;
use data_loader::MovieRecord;
use tracing::debug;

/// Applies the category filters, then the selected ordering.
pub struct FilterSortEngine {
    pipeline: FilterPipeline,
}

impl FilterSortEngine {
    pub fn new(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    /// Produce the ordered subset for `state`.
    ///
    /// ## Algorithm
    /// 1. Start from a copy of the full dataset (source order)
    /// 2. Run the filter pipeline (character, then phase)
    /// 3. Stable sort by the selected mode; ties keep their prior order
    pub fn apply<'a>(&self, movies: &'a [MovieRecord], state: &FilterState) -> Vec<&'a MovieRecord> {
        let working: Vec<&MovieRecord> = movies.iter().collect();
        let mut filtered = self.pipeline.apply(working, state);
        sort_movies(&mut filtered, state.sort_mode);

        debug!(
            "Filter/sort produced {} of {} movies (sort: {:?}, character: {}, phase: {})",
            filtered.len(),
            movies.len(),
            state.sort_mode,
            state.character,
            state.phase
        );
        filtered
    }
}

impl Default for FilterSortEngine {
    fn default() -> Self {
        Self::new(FilterPipeline::standard())
    }
}
