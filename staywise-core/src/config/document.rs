//! Interpretation of the compound attractions JSON document.
//!
//! The document is keyed by city. Each city maps entry names to compound
//! group definitions; entries without `included_attractions` are not groups
//! and are ignored. The reserved top-level key `neighborhoods` maps city names
//! to their walking districts; `clustering_rules` is reserved and skipped.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::ConfigError;
use crate::{CityConfig, CompoundGroup, DEFAULT_VISIT_DURATION_HOURS, Neighborhood, NeighborhoodMap};

/// Top-level key holding neighborhood tables rather than a city.
pub(crate) const NEIGHBORHOODS_KEY: &str = "neighborhoods";

/// Top-level keys reserved for engine-wide settings rather than cities.
const RESERVED_KEYS: [&str; 1] = ["clustering_rules"];

/// Field whose presence marks an entry as a compound group.
const MEMBERS_FIELD: &str = "included_attractions";

#[derive(Debug, Deserialize)]
struct RawGroup {
    included_attractions: Vec<String>,
    #[serde(default)]
    core_attraction: Option<String>,
    #[serde(default)]
    excluded_attractions: Option<Vec<String>>,
    #[serde(default)]
    must_visit_together: Option<bool>,
    #[serde(default)]
    visit_duration_hours: Option<f64>,
    #[serde(default)]
    neighborhood: Option<String>,
}

impl RawGroup {
    fn into_group(self, name: String) -> CompoundGroup {
        let mut group = CompoundGroup::new(name, self.included_attractions)
            .with_excluded(self.excluded_attractions.unwrap_or_default())
            .with_must_group(self.must_visit_together.unwrap_or(false))
            .with_visit_duration_hours(
                self.visit_duration_hours
                    .unwrap_or(DEFAULT_VISIT_DURATION_HOURS),
            )
            .with_neighborhood(self.neighborhood.unwrap_or_default());
        if let Some(core) = self.core_attraction {
            group = group.with_core_attraction(core);
        }
        group
    }
}

/// Parse a whole document into per-city configuration.
pub(crate) fn parse_document(text: &str) -> Result<BTreeMap<String, CityConfig>, ConfigError> {
    let root: Value = serde_json::from_str(text).map_err(|source| ConfigError::Parse { source })?;
    let Value::Object(root_map) = root else {
        return Err(ConfigError::NotAnObject);
    };

    let mut cities = BTreeMap::new();
    let mut neighborhoods = Vec::new();
    for (key, value) in root_map {
        if key == NEIGHBORHOODS_KEY {
            neighborhoods = parse_neighborhood_tables(value)?;
            continue;
        }
        if RESERVED_KEYS.contains(&key.as_str()) {
            debug!("Skipping reserved configuration key {key:?}");
            continue;
        }
        let Value::Object(entries) = value else {
            warn!("Skipping configuration entry {key:?}: expected an object of compound groups");
            continue;
        };
        let groups = parse_groups(&key, entries)?;
        cities.insert(key, CityConfig::new(groups, NeighborhoodMap::empty()));
    }

    for (city, map) in neighborhoods {
        cities
            .entry(city)
            .or_insert_with(CityConfig::empty)
            .set_neighborhoods(map);
    }
    Ok(cities)
}

fn parse_groups(city: &str, entries: Map<String, Value>) -> Result<Vec<CompoundGroup>, ConfigError> {
    let mut groups = Vec::new();
    for (name, entry) in entries {
        let is_group = entry
            .as_object()
            .is_some_and(|fields| fields.contains_key(MEMBERS_FIELD));
        if !is_group {
            continue;
        }
        let raw: RawGroup =
            serde_json::from_value(entry).map_err(|source| ConfigError::InvalidGroup {
                city: city.to_owned(),
                group: name.clone(),
                source,
            })?;
        groups.push(raw.into_group(name));
    }
    Ok(groups)
}

fn parse_neighborhood_tables(value: Value) -> Result<Vec<(String, NeighborhoodMap)>, ConfigError> {
    let Value::Object(by_city) = value else {
        warn!("Ignoring {NEIGHBORHOODS_KEY:?}: expected an object keyed by city name");
        return Ok(Vec::new());
    };
    by_city
        .into_iter()
        .map(|(city, table)| {
            let districts: Map<String, Value> = serde_json::from_value(table).map_err(|source| {
                ConfigError::InvalidNeighborhoods {
                    city: city.clone(),
                    source,
                }
            })?;
            let parsed = districts
                .into_iter()
                .map(|(name, attractions)| {
                    serde_json::from_value::<Vec<String>>(attractions)
                        .map(|names| Neighborhood::new(name, names))
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| ConfigError::InvalidNeighborhoods {
                    city: city.clone(),
                    source,
                })?;
            Ok((city, NeighborhoodMap::new(parsed)))
        })
        .collect()
}
