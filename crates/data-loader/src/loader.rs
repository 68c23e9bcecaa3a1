//! Dataset loading.
//!
//! `Dataset::load` is the single entry point used at startup: fetch the
//! payload once, parse it, and hand back a read-only `Dataset`.

use crate::error::Result;
use crate::parser;
use crate::source::DatasetSource;
use crate::types::Dataset;
use std::time::Instant;
use tracing::info;

impl Dataset {
    /// Load the dataset from a source
    ///
    /// Steps:
    /// 1. Fetch the raw payload (file read or HTTP GET)
    /// 2. Parse it as a JSON array of movie objects
    ///
    /// Either step failing yields a `FetchError`; nothing is retried.
    pub async fn load(source: &DatasetSource) -> Result<Self> {
        let start = Instant::now();
        let source_name = source.to_string();

        let bytes = source.fetch().await?;
        let movies = parser::parse_movies(&bytes, &source_name)?;

        info!(
            "Loaded {} movies from {} in {:?}",
            movies.len(),
            source_name,
            start.elapsed()
        );

        Ok(Dataset::new(source_name, movies))
    }
}
