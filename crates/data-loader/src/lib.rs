//! # Data Loader Crate
//!
//! This crate retrieves the movie dataset that backs the gallery.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, ReleaseDate, Dataset)
//! - **parser**: Decode the JSON payload into records
//! - **source**: Where the payload lives (local file or HTTP URL)
//! - **loader**: One-shot `Dataset::load`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Dataset, DatasetSource};
//!
//! // Load the dataset from the default relative path
//! let dataset = Dataset::load(&DatasetSource::default()).await?;
//!
//! for movie in &dataset {
//!     println!("{} ({})", movie.title, movie.release_date.raw());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{FetchError, Result};
pub use parser::parse_movies;
pub use source::{DatasetSource, DEFAULT_DATASET_PATH};
pub use types::{Dataset, MovieRecord, ReleaseDate};
