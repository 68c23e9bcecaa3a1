//! Where the dataset comes from.
//!
//! A source is either a local file (the default `movies.json` next to the
//! page) or an HTTP(S) URL. Both are read exactly once; there is no retry.

use crate::error::{FetchError, Result};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Fixed relative path of the dataset
pub const DEFAULT_DATASET_PATH: &str = "movies.json";

/// A location the dataset can be fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Http(String),
}

impl DatasetSource {
    /// Retrieve the raw payload.
    ///
    /// For HTTP sources any non-success status is an error, and the body is
    /// never read in that case.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            DatasetSource::File(path) => {
                debug!("Reading dataset file {}", path.display());
                tokio::fs::read(path).await.map_err(|e| FetchError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
            DatasetSource::Http(url) => {
                debug!("Requesting dataset from {}", url);
                let response = reqwest::get(url.as_str()).await.map_err(|e| FetchError::Transport {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }

                let body = response.bytes().await.map_err(|e| FetchError::Transport {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;
                Ok(body.to_vec())
            }
        }
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::File(PathBuf::from(DEFAULT_DATASET_PATH))
    }
}

impl FromStr for DatasetSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DatasetSource::Http(s.to_string()))
        } else {
            Ok(DatasetSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Http(url) => f.write_str(url),
        }
    }
}
