//! Read-only store of per-city compound groups and neighborhoods.
//!
//! The store is populated once, from the first candidate document that
//! exists and parses, and never changes afterwards. Missing configuration is
//! not an error: every city then resolves to an empty [`CityConfig`] and the
//! grouping features degrade to no-ops.

use std::collections::BTreeMap;
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info, warn};
use staywise_fs::FileProbe;

use crate::{CityConfig, CompoundGroup, NeighborhoodMap};

mod document;
mod error;

pub use error::ConfigError;

/// File name searched for by [`default_candidate_paths`].
pub const CONFIG_FILE_NAME: &str = "compound_attractions.json";

static EMPTY_CITY: CityConfig = CityConfig::empty();

/// Candidate locations for the configuration document, in priority order.
///
/// `base_dir` is normally the directory holding the running binary.
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use staywise_core::default_candidate_paths;
///
/// let paths = default_candidate_paths(Utf8Path::new("/opt/staywise"));
/// assert_eq!(paths[0], "/opt/staywise/data/compound_attractions.json");
/// assert_eq!(paths[3], "data/compound_attractions.json");
/// ```
#[must_use]
pub fn default_candidate_paths(base_dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    vec![
        base_dir.join("data").join(CONFIG_FILE_NAME),
        base_dir.join(CONFIG_FILE_NAME),
        Utf8PathBuf::from("/data").join(CONFIG_FILE_NAME),
        Utf8PathBuf::from("data").join(CONFIG_FILE_NAME),
    ]
}

/// A candidate that existed but could not be used.
#[derive(Debug)]
pub struct CandidateFailure {
    /// Candidate path.
    pub path: Utf8PathBuf,
    /// Why it was rejected.
    pub error: ConfigError,
}

/// Outcome of [`ConfigStore::load`], kept for operational visibility.
#[derive(Debug)]
pub enum LoadStatus {
    /// A candidate was loaded.
    Loaded {
        /// The winning candidate.
        path: Utf8PathBuf,
        /// Number of cities the document configures.
        cities: usize,
        /// Earlier candidates that existed but failed.
        failures: Vec<CandidateFailure>,
    },
    /// No candidate could be loaded; the store is empty.
    Unavailable {
        /// Every candidate tried, in order.
        searched: Vec<Utf8PathBuf>,
        /// Candidates that existed but failed.
        failures: Vec<CandidateFailure>,
    },
}

impl LoadStatus {
    /// Whether a configuration document was loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Candidates that existed but failed to load.
    #[must_use]
    pub fn failures(&self) -> &[CandidateFailure] {
        match self {
            Self::Loaded { failures, .. } | Self::Unavailable { failures, .. } => failures,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { path, cities, .. } => write!(
                f,
                "loaded compound attractions from {path} covering {cities} cities"
            ),
            Self::Unavailable { searched, .. } => {
                f.write_str("compound attractions configuration not found in any of: ")?;
                for (position, path) in searched.iter().enumerate() {
                    if position > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{path}")?;
                }
                f.write_str("; compound grouping disabled")
            }
        }
    }
}

/// Immutable per-city configuration shared by every engine call.
///
/// # Examples
/// ```
/// use staywise_core::ConfigStore;
///
/// let store = ConfigStore::from_json_str(
///     r#"{"Granada": {"Alhambra Complex": {
///         "included_attractions": ["Alhambra", "Generalife"],
///         "must_visit_together": true
///     }}}"#,
/// )
/// .expect("valid document");
///
/// assert_eq!(store.groups("Granada").len(), 1);
/// assert!(store.groups("Unknown").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    cities: BTreeMap<String, CityConfig>,
}

impl ConfigStore {
    /// A store with no cities.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cities: BTreeMap::new(),
        }
    }

    /// Build a store from already-constructed city configurations.
    #[must_use]
    pub fn from_cities<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = (S, CityConfig)>,
        S: Into<String>,
    {
        Self {
            cities: cities
                .into_iter()
                .map(|(name, config)| (name.into(), config))
                .collect(),
        }
    }

    /// Parse a configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the text is not JSON, the root is not an
    /// object, or a compound group or neighborhood table is malformed.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        document::parse_document(text).map(|cities| Self { cities })
    }

    /// Read and parse a single configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`ConfigStore::from_json_str`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = staywise_fs::read_utf8_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Load from the first candidate that exists and parses.
    ///
    /// Later candidates are never read once one succeeds. When every
    /// candidate fails the store is empty; this is reported through the
    /// returned [`LoadStatus`] and never as an error.
    pub fn load<I, P>(candidates: I) -> (Self, LoadStatus)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let mut searched = Vec::new();
        let mut failures = Vec::new();
        for candidate in candidates {
            let path = candidate.as_ref();
            searched.push(path.to_path_buf());
            match staywise_fs::probe_file(path) {
                Ok(FileProbe::File) => {}
                Ok(FileProbe::Missing) => {
                    debug!("No compound attractions file at {path}");
                    continue;
                }
                Ok(FileProbe::NotFile) => {
                    warn!("Compound attractions candidate {path} is not a regular file");
                    failures.push(CandidateFailure {
                        path: path.to_path_buf(),
                        error: ConfigError::NotAFile {
                            path: path.to_path_buf(),
                        },
                    });
                    continue;
                }
                Err(source) => {
                    warn!("Cannot inspect compound attractions candidate {path}: {source}");
                    failures.push(CandidateFailure {
                        path: path.to_path_buf(),
                        error: ConfigError::Read {
                            path: path.to_path_buf(),
                            source,
                        },
                    });
                    continue;
                }
            }
            match Self::from_path(path) {
                Ok(store) => {
                    let status = LoadStatus::Loaded {
                        path: path.to_path_buf(),
                        cities: store.cities.len(),
                        failures,
                    };
                    info!("{status}");
                    return (store, status);
                }
                Err(error) => {
                    warn!("Error loading compound attractions from {path}: {error}");
                    failures.push(CandidateFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
        }

        let status = LoadStatus::Unavailable { searched, failures };
        warn!("{status}");
        (Self::empty(), status)
    }

    /// Configuration for `city`, or an empty configuration when absent.
    #[must_use]
    pub fn city(&self, city: &str) -> &CityConfig {
        self.cities.get(city).unwrap_or(&EMPTY_CITY)
    }

    /// Compound groups for `city` in declared order.
    #[must_use]
    pub fn groups(&self, city: &str) -> &[CompoundGroup] {
        self.city(city).groups()
    }

    /// Neighborhoods for `city` in declared order.
    #[must_use]
    pub fn neighborhoods(&self, city: &str) -> &NeighborhoodMap {
        self.city(city).neighborhoods()
    }

    /// Whether `city` has any configuration.
    #[must_use]
    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// Configured city names, sorted.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Whether no city is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
