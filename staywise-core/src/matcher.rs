//! Resolve which compound group, if any, a POI name belongs to.
//!
//! Matching runs in two passes over the city's groups in declared order:
//! first exact, case-sensitive membership; then, only if no group matched
//! exactly, case-insensitive substring containment in either direction.
//! The first group found wins.

use crate::{CityConfig, CompoundGroup};

/// How `excluded` lists take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Exclusion lists are never consulted, so an excluded name can still be
    /// pulled into a group by containment.
    #[default]
    Lenient,
    /// A group never matches a name listed in its own `excluded` entries.
    HonourExclusions,
}

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The name is listed verbatim among the members.
    Exact,
    /// The name and a member contain one another, ignoring case.
    Fuzzy,
}

/// A matched group together with the pass that found it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMatch<'city> {
    /// The matched group.
    pub group: &'city CompoundGroup,
    /// Which pass found it.
    pub kind: MatchKind,
}

/// Group lookups against one city's configuration.
///
/// # Examples
/// ```
/// use staywise_core::{CityConfig, CompoundGroup, GroupMatcher, MatchKind, NeighborhoodMap};
///
/// let city = CityConfig::new(
///     vec![CompoundGroup::new("Alhambra Complex", ["Alhambra", "Generalife"])],
///     NeighborhoodMap::empty(),
/// );
/// let matcher = GroupMatcher::new(&city);
///
/// let hit = matcher.find("Generalife Gardens").expect("fuzzy match");
/// assert_eq!(hit.group.name(), "Alhambra Complex");
/// assert_eq!(hit.kind, MatchKind::Fuzzy);
/// assert!(matcher.find_group("Sacromonte Caves").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GroupMatcher<'city> {
    city: &'city CityConfig,
    policy: MatchPolicy,
}

impl<'city> GroupMatcher<'city> {
    /// Build a lenient matcher over `city`.
    #[must_use]
    pub const fn new(city: &'city CityConfig) -> Self {
        Self {
            city,
            policy: MatchPolicy::Lenient,
        }
    }

    /// Use `policy` for exclusion handling.
    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active exclusion policy.
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// The city configuration searched by this matcher.
    #[must_use]
    pub const fn city(&self) -> &'city CityConfig {
        self.city
    }

    /// Find the group `poi_name` belongs to.
    #[must_use]
    pub fn find_group(&self, poi_name: &str) -> Option<&'city CompoundGroup> {
        self.find(poi_name).map(|hit| hit.group)
    }

    /// Find the group `poi_name` belongs to, reporting which pass matched.
    #[must_use]
    pub fn find(&self, poi_name: &str) -> Option<GroupMatch<'city>> {
        self.find_exact(poi_name)
            .map(|group| GroupMatch {
                group,
                kind: MatchKind::Exact,
            })
            .or_else(|| {
                self.find_fuzzy(poi_name).map(|group| GroupMatch {
                    group,
                    kind: MatchKind::Fuzzy,
                })
            })
    }

    /// Find the must-group `poi_name` belongs to.
    ///
    /// The lookup itself ignores `must_group`: a name whose first match is an
    /// informational group yields `None` even if a later must-group would
    /// also match.
    #[must_use]
    pub fn find_must_group(&self, poi_name: &str) -> Option<&'city CompoundGroup> {
        self.find_group(poi_name).filter(|group| group.must_group())
    }

    fn find_exact(&self, poi_name: &str) -> Option<&'city CompoundGroup> {
        self.candidates(poi_name)
            .find(|group| group.contains_exact(poi_name))
    }

    fn find_fuzzy(&self, poi_name: &str) -> Option<&'city CompoundGroup> {
        if poi_name.trim().is_empty() {
            return None;
        }
        let needle = poi_name.to_lowercase();
        self.candidates(poi_name).find(|group| {
            group
                .members()
                .iter()
                .filter(|member| !member.trim().is_empty())
                .map(|member| member.to_lowercase())
                .any(|member| member.contains(&needle) || needle.contains(&member))
        })
    }

    fn candidates(self, poi_name: &str) -> impl Iterator<Item = &'city CompoundGroup> {
        let honour_exclusions = self.policy == MatchPolicy::HonourExclusions;
        self.city
            .groups()
            .iter()
            .filter(move |group| !(honour_exclusions && group.is_excluded(poi_name)))
    }
}
