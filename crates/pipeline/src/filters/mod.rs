//! Filter implementations for the gallery pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod character;
pub mod phase;

// Re-export for convenience
pub use character::CharacterFilter;
pub use phase::PhaseFilter;
