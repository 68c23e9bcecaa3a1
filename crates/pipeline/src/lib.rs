//! Pipeline for filtering and ordering the movie gallery.
//!
//! This crate provides:
//! - FilterState: the user's sort mode and category selections
//! - Filter trait and implementations for category filtering
//! - FilterPipeline for composing filters
//! - FilterSortEngine: filters plus stable ordering
//! - Option derivation for the character and phase controls
//!
//! ## Architecture
//! Every control change runs the same synchronous stages:
//! 1. Filters remove records that do not match the selections
//! 2. The remaining records are stable-sorted by the selected mode
//! 3. The ordered list goes to the renderer
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{derive_filter_options, FilterSortEngine, FilterState};
//!
//! let options = derive_filter_options(dataset.movies());
//! let engine = FilterSortEngine::default();
//!
//! let state = FilterState::from_control_values("release", "Thor", "all");
//! let visible = engine.apply(dataset.movies(), &state);
//! ```

pub mod state;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod options;
pub mod engine;

// Re-export main types
pub use state::{FilterState, Selection, SortMode};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use engine::FilterSortEngine;
pub use options::{derive_filter_options, FilterOptions};
