//! Errors raised while reading a compound attractions document.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or interpreting a configuration candidate.
///
/// None of these escape [`ConfigStore::load`](crate::ConfigStore::load); they
/// are reported through [`LoadStatus`](crate::LoadStatus) instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the candidate file failed.
    #[error("failed to read configuration at {path}")]
    Read {
        /// Candidate path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The candidate exists but is a directory or other non-file entry.
    #[error("configuration candidate {path} is not a regular file")]
    NotAFile {
        /// Candidate path.
        path: Utf8PathBuf,
    },
    /// The candidate is not valid JSON.
    #[error("failed to parse configuration JSON")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The document root is not a JSON object keyed by city.
    #[error("configuration root must be an object keyed by city name")]
    NotAnObject,
    /// A compound group entry carried fields of the wrong type.
    #[error("compound group {group:?} in {city:?} is malformed")]
    InvalidGroup {
        /// City the entry belongs to.
        city: String,
        /// Entry key.
        group: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A city's neighborhood table is malformed.
    #[error("neighborhoods for {city:?} are malformed")]
    InvalidNeighborhoods {
        /// City the table belongs to.
        city: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
