//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the movie list.

use crate::state::FilterState;
use data_loader::MovieRecord;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters work on borrowed records so the dataset itself is never copied
///   or mutated
/// - Filters take ownership of the working Vec and return a filtered Vec,
///   keeping the relative order of the records they retain
/// - Filtering cannot fail: a record whose field is missing simply does not
///   match a specific selection
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `state` - Current selections
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>, state: &FilterState) -> Vec<&'a MovieRecord>;
}
