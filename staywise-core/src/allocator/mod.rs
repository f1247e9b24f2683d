//! Spread a city's POIs across the days of a stay.
//!
//! Allocation is a deterministic two-phase greedy pass. POIs belonging to a
//! must-group are first gathered into compound units, which are placed whole
//! on the least-loaded day; standalone POIs then fill the least-loaded day
//! one at a time. Ties always go to the lowest day index.

use log::debug;
use thiserror::Error;

use crate::{Attraction, GroupMatcher};

/// Errors returned by [`DayAllocator::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// A stay must last at least one day.
    #[error("cannot split points of interest across zero days")]
    ZeroDays,
}

/// POIs of one must-group that travel together.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundUnit<P> {
    /// Name of the must-group.
    pub group_name: String,
    /// Member POIs in input order.
    pub pois: Vec<P>,
}

/// Result of the grouping phase.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundPartition<P> {
    /// Must-group units in first-encounter order.
    pub grouped: Vec<CompoundUnit<P>>,
    /// POIs bound by no must-group, in input order.
    pub standalone: Vec<P>,
}

impl<P> CompoundPartition<P> {
    /// Total number of POIs across units and standalone entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grouped.iter().map(|unit| unit.pois.len()).sum::<usize>() + self.standalone.len()
    }

    /// Whether the partition holds no POIs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standalone.is_empty() && self.grouped.iter().all(|unit| unit.pois.is_empty())
    }
}

/// POIs assigned to one day of a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<P> {
    pois: Vec<P>,
    count: usize,
}

impl<P> DayBucket<P> {
    const fn new() -> Self {
        Self {
            pois: Vec::new(),
            count: 0,
        }
    }

    fn push_unit(&mut self, unit: Vec<P>) {
        self.count += unit.len();
        self.pois.extend(unit);
    }

    fn push(&mut self, poi: P) {
        self.count += 1;
        self.pois.push(poi);
    }

    /// POIs in placement order.
    #[must_use]
    pub fn pois(&self) -> &[P] {
        &self.pois
    }

    /// Load used for balancing.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether nothing was placed on this day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// Take the POIs out of the bucket.
    #[must_use]
    pub fn into_pois(self) -> Vec<P> {
        self.pois
    }
}

/// Split `pois` into must-group units and standalone POIs.
///
/// A POI whose group is not flagged `must_group` is standalone. Units are
/// ordered by the first POI seen for each group, which keeps allocation
/// deterministic.
#[must_use]
pub fn partition<P, I>(pois: I, matcher: &GroupMatcher<'_>) -> CompoundPartition<P>
where
    P: Attraction,
    I: IntoIterator<Item = P>,
{
    let mut grouped: Vec<CompoundUnit<P>> = Vec::new();
    let mut standalone = Vec::new();
    for poi in pois {
        let Some(group) = matcher.find_must_group(poi.name()) else {
            standalone.push(poi);
            continue;
        };
        if let Some(unit) = grouped
            .iter_mut()
            .find(|unit| unit.group_name == group.name())
        {
            unit.pois.push(poi);
            continue;
        }
        grouped.push(CompoundUnit {
            group_name: group.name().to_owned(),
            pois: vec![poi],
        });
    }
    CompoundPartition {
        grouped,
        standalone,
    }
}

/// Least-loaded day allocation for one city.
///
/// # Examples
/// ```
/// use staywise_core::{
///     CityConfig, CompoundGroup, DayAllocator, GroupMatcher, NeighborhoodMap, PointOfInterest,
/// };
///
/// let city = CityConfig::new(
///     vec![CompoundGroup::new("Alhambra Complex", ["Alhambra", "Generalife"]).with_must_group(true)],
///     NeighborhoodMap::empty(),
/// );
/// let matcher = GroupMatcher::new(&city);
/// let pois = ["Alhambra", "Albaicin", "Generalife"]
///     .map(|name| PointOfInterest::new(name, "Granada"));
///
/// let days = DayAllocator::new(matcher).split(pois, 2).expect("non-zero days");
/// assert_eq!(days[0].count(), 2);
/// assert_eq!(days[1].pois()[0].name, "Albaicin");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DayAllocator<'city> {
    matcher: GroupMatcher<'city>,
    quota_per_day: Option<usize>,
}

impl<'city> DayAllocator<'city> {
    /// Build an allocator grouping POIs with `matcher`.
    #[must_use]
    pub const fn new(matcher: GroupMatcher<'city>) -> Self {
        Self {
            matcher,
            quota_per_day: None,
        }
    }

    /// Record a target number of POIs per day.
    ///
    /// The quota is advisory: it never changes placement, and days that end
    /// above it are only reported in the debug log.
    #[must_use]
    pub const fn with_quota(mut self, quota_per_day: usize) -> Self {
        self.quota_per_day = Some(quota_per_day);
        self
    }

    /// Distribute `pois` over `num_days` days.
    ///
    /// Every input POI lands on exactly one day, and all POIs of a must-group
    /// land on the same day.
    ///
    /// # Errors
    /// Returns [`AllocationError::ZeroDays`] when `num_days` is zero.
    pub fn split<P, I>(&self, pois: I, num_days: usize) -> Result<Vec<DayBucket<P>>, AllocationError>
    where
        P: Attraction,
        I: IntoIterator<Item = P>,
    {
        if num_days == 0 {
            return Err(AllocationError::ZeroDays);
        }
        let CompoundPartition {
            grouped,
            standalone,
        } = partition(pois, &self.matcher);
        let mut days: Vec<DayBucket<P>> = (0..num_days).map(|_| DayBucket::new()).collect();

        for unit in grouped {
            let (index, day) = least_loaded(&mut days).ok_or(AllocationError::ZeroDays)?;
            debug!(
                "Assigned {} ({} POIs) to day {}",
                unit.group_name,
                unit.pois.len(),
                index + 1
            );
            day.push_unit(unit.pois);
        }

        for poi in standalone {
            let (_, day) = least_loaded(&mut days).ok_or(AllocationError::ZeroDays)?;
            day.push(poi);
        }

        if let Some(quota) = self.quota_per_day {
            for (index, day) in days.iter().enumerate() {
                if day.count() > quota {
                    debug!(
                        "Day {} holds {} POIs, above the advisory quota of {quota}",
                        index + 1,
                        day.count()
                    );
                }
            }
        }
        Ok(days)
    }
}

/// The day with the fewest POIs; `min_by_key` keeps the first minimum, so
/// ties resolve to the lowest index.
fn least_loaded<P>(days: &mut [DayBucket<P>]) -> Option<(usize, &mut DayBucket<P>)> {
    days.iter_mut()
        .enumerate()
        .min_by_key(|(_, day)| day.count())
}
