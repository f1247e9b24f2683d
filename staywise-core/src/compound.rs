//! Compound groups, neighborhoods and the per-city configuration holding them.
//!
//! All types here are value objects: they are built once from configuration
//! and never mutated afterwards.

use serde::Serialize;

/// Visit budget assumed when configuration omits `visit_duration_hours`.
pub const DEFAULT_VISIT_DURATION_HOURS: f64 = 2.0;

/// A named complex of physically co-located attractions.
///
/// # Examples
/// ```
/// use staywise_core::CompoundGroup;
///
/// let group = CompoundGroup::new("Alhambra Complex", ["Alhambra", "Generalife"])
///     .with_must_group(true)
///     .with_core_attraction("Alhambra");
///
/// assert!(group.must_group());
/// assert!(group.contains_exact("Generalife"));
/// assert!(!group.contains_exact("generalife"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundGroup {
    name: String,
    core_attraction: Option<String>,
    members: Vec<String>,
    excluded: Vec<String>,
    must_group: bool,
    visit_duration_hours: f64,
    neighborhood: Option<String>,
}

impl CompoundGroup {
    /// Construct a group with the given members and default metadata.
    ///
    /// Groups start out informational: `must_group` is `false` until
    /// [`CompoundGroup::with_must_group`] says otherwise.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            core_attraction: None,
            members: members.into_iter().map(Into::into).collect(),
            excluded: Vec::new(),
            must_group: false,
            visit_duration_hours: DEFAULT_VISIT_DURATION_HOURS,
            neighborhood: None,
        }
    }

    /// Set the anchor attraction.
    #[must_use]
    pub fn with_core_attraction(mut self, core: impl Into<String>) -> Self {
        self.core_attraction = Some(core.into());
        self
    }

    /// Set the names that must not be treated as members.
    #[must_use]
    pub fn with_excluded<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    /// Mark whether members must share a day.
    #[must_use]
    pub const fn with_must_group(mut self, must_group: bool) -> Self {
        self.must_group = must_group;
        self
    }

    /// Set the informational visit budget for the whole complex.
    #[must_use]
    pub const fn with_visit_duration_hours(mut self, hours: f64) -> Self {
        self.visit_duration_hours = hours;
        self
    }

    /// Link the group to a walking district. Blank names clear the link.
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        let name = neighborhood.into();
        self.neighborhood = if name.trim().is_empty() { None } else { Some(name) };
        self
    }

    /// Group name, unique within its city.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Anchor attraction, if configured.
    #[must_use]
    pub fn core_attraction(&self) -> Option<&str> {
        self.core_attraction.as_deref()
    }

    /// Member attraction names in declared order. May contain duplicates.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Names explicitly excluded from the group.
    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Whether members must never be split across days.
    #[must_use]
    pub const fn must_group(&self) -> bool {
        self.must_group
    }

    /// Informational time budget for the complex, in hours.
    #[must_use]
    pub const fn visit_duration_hours(&self) -> f64 {
        self.visit_duration_hours
    }

    /// Walking district the complex sits in.
    #[must_use]
    pub fn neighborhood(&self) -> Option<&str> {
        self.neighborhood.as_deref()
    }

    /// Case-sensitive membership test.
    #[must_use]
    pub fn contains_exact(&self, attraction: &str) -> bool {
        self.members.iter().any(|member| member == attraction)
    }

    /// Whether `attraction` is listed in `excluded`, ignoring case.
    #[must_use]
    pub fn is_excluded(&self, attraction: &str) -> bool {
        let needle = attraction.to_lowercase();
        self.excluded
            .iter()
            .any(|excluded| excluded.to_lowercase() == needle)
    }
}

/// A named walking district and the attractions inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighborhood {
    name: String,
    attractions: Vec<String>,
}

impl Neighborhood {
    /// Construct a neighborhood from its attraction names.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, attractions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            attractions: attractions.into_iter().map(Into::into).collect(),
        }
    }

    /// District name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attraction names in declared order.
    #[must_use]
    pub fn attractions(&self) -> &[String] {
        &self.attractions
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, attraction: &str) -> bool {
        self.attractions.iter().any(|name| name == attraction)
    }
}

/// Ordered neighborhoods of one city.
///
/// # Examples
/// ```
/// use staywise_core::{Neighborhood, NeighborhoodMap};
///
/// let map = NeighborhoodMap::new(vec![
///     Neighborhood::new("Albaicin", ["Mirador de San Nicolas"]),
///     Neighborhood::new("Centro", ["Granada Cathedral", "Royal Chapel"]),
/// ]);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.neighborhood_of("Royal Chapel").map(|n| n.name()), Some("Centro"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NeighborhoodMap {
    neighborhoods: Vec<Neighborhood>,
}

impl NeighborhoodMap {
    /// Construct a map; declaration order is kept.
    #[must_use]
    pub const fn new(neighborhoods: Vec<Neighborhood>) -> Self {
        Self { neighborhoods }
    }

    /// A map with no neighborhoods.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Look up a neighborhood by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Neighborhood> {
        self.neighborhoods.iter().find(|n| n.name == name)
    }

    /// First declared neighborhood listing `attraction`.
    #[must_use]
    pub fn neighborhood_of(&self, attraction: &str) -> Option<&Neighborhood> {
        self.neighborhoods.iter().find(|n| n.contains(attraction))
    }

    /// Iterate neighborhoods in declared order.
    pub fn iter(&self) -> std::slice::Iter<'_, Neighborhood> {
        self.neighborhoods.iter()
    }

    /// Number of neighborhoods.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.neighborhoods.len()
    }

    /// Whether no neighborhoods are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty()
    }
}

impl<'a> IntoIterator for &'a NeighborhoodMap {
    type Item = &'a Neighborhood;
    type IntoIter = std::slice::Iter<'a, Neighborhood>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compound groups and neighborhoods configured for one city.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityConfig {
    groups: Vec<CompoundGroup>,
    neighborhoods: NeighborhoodMap,
}

impl CityConfig {
    /// Construct a city configuration; group order is kept.
    #[must_use]
    pub const fn new(groups: Vec<CompoundGroup>, neighborhoods: NeighborhoodMap) -> Self {
        Self {
            groups,
            neighborhoods,
        }
    }

    /// A city with no groups and no neighborhoods.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), NeighborhoodMap::empty())
    }

    /// Compound groups in declared order.
    #[must_use]
    pub fn groups(&self) -> &[CompoundGroup] {
        &self.groups
    }

    /// Groups flagged `must_group`, in declared order.
    pub fn must_groups(&self) -> impl Iterator<Item = &CompoundGroup> {
        self.groups.iter().filter(|group| group.must_group())
    }

    /// Neighborhoods in declared order.
    #[must_use]
    pub const fn neighborhoods(&self) -> &NeighborhoodMap {
        &self.neighborhoods
    }

    /// Whether the city carries no configuration at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.neighborhoods.is_empty()
    }

    pub(crate) fn set_neighborhoods(&mut self, neighborhoods: NeighborhoodMap) {
        self.neighborhoods = neighborhoods;
    }
}
