//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{CharacterFilter, PhaseFilter};
use crate::state::FilterState;
use crate::traits::Filter;
use data_loader::MovieRecord;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CharacterFilter)
///     .add_filter(PhaseFilter);
///
/// let filtered = pipeline.apply(dataset.iter().collect(), &state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The gallery's filters: character first, then phase.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(CharacterFilter)
            .add_filter(PhaseFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// Each filter keeps the relative order of what it retains, so the
    /// output order is the input order minus removed records.
    pub fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        state: &FilterState,
    ) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
