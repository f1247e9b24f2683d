//! Fixtures shared by unit tests and downstream crates' tests.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use crate::{CityConfig, CompoundGroup, ConfigStore, Neighborhood, NeighborhoodMap, PointOfInterest};

/// Granada with one must-group, one informational group and two districts.
///
/// - `Alhambra Complex` (must-group): Alhambra, Generalife, Palace of
///   Charles V; excludes "Alhambra Palace Hotel".
/// - `Cathedral Quarter` (informational): Granada Cathedral, Royal Chapel.
/// - Neighborhoods `Albaicin` (Mirador de San Nicolas, Banuelo) and
///   `Centro` (Granada Cathedral, Royal Chapel, Corral del Carbon).
#[must_use]
pub fn granada_city() -> CityConfig {
    CityConfig::new(
        vec![
            CompoundGroup::new(
                "Alhambra Complex",
                ["Alhambra", "Generalife", "Palace of Charles V"],
            )
            .with_core_attraction("Alhambra")
            .with_excluded(["Alhambra Palace Hotel"])
            .with_must_group(true)
            .with_visit_duration_hours(4.0)
            .with_neighborhood("Alhambra Hill"),
            CompoundGroup::new("Cathedral Quarter", ["Granada Cathedral", "Royal Chapel"])
                .with_neighborhood("Centro"),
        ],
        NeighborhoodMap::new(vec![
            Neighborhood::new("Albaicin", ["Mirador de San Nicolas", "Banuelo"]),
            Neighborhood::new(
                "Centro",
                ["Granada Cathedral", "Royal Chapel", "Corral del Carbon"],
            ),
        ]),
    )
}

/// A store holding only [`granada_city`].
#[must_use]
pub fn granada_store() -> ConfigStore {
    ConfigStore::from_cities([("Granada", granada_city())])
}

/// POIs with the given names, all in `city`.
#[must_use]
pub fn pois<'a, I>(city: &str, names: I) -> Vec<PointOfInterest>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| PointOfInterest::new(name, city))
        .collect()
}
