//! Complete partially selected compound groups within one day.

use log::debug;

use crate::{Attraction, CityConfig, CompoundGroup};

/// Append the missing members of every must-group already touched by
/// `selected`.
///
/// A must-group counts as touched when any selected POI carries one of its
/// member names exactly. Missing members are taken from `available` (the
/// first POI with that exact name) and appended in member order. Members
/// absent from `available` are skipped. Groups are revisited until a pass
/// adds nothing, so a member shared by two must-groups completes both.
/// Existing entries are never removed or reordered, and running the function
/// again on its own output changes nothing.
///
/// # Examples
/// ```
/// use staywise_core::{
///     CityConfig, CompoundGroup, NeighborhoodMap, PointOfInterest, ensure_integrity,
/// };
///
/// let city = CityConfig::new(
///     vec![CompoundGroup::new("Alhambra Complex", ["Alhambra", "Generalife"]).with_must_group(true)],
///     NeighborhoodMap::empty(),
/// );
/// let available = vec![
///     PointOfInterest::new("Alhambra", "Granada"),
///     PointOfInterest::new("Generalife", "Granada"),
/// ];
///
/// let day = ensure_integrity(vec![available[0].clone()], &available, &city);
/// assert_eq!(day, available);
/// ```
#[must_use]
pub fn ensure_integrity<P>(mut selected: Vec<P>, available: &[P], city: &CityConfig) -> Vec<P>
where
    P: Attraction + Clone,
{
    loop {
        let before = selected.len();
        for group in city.must_groups() {
            complete_group(&mut selected, available, group);
        }
        if selected.len() == before {
            return selected;
        }
    }
}

fn complete_group<P>(selected: &mut Vec<P>, available: &[P], group: &CompoundGroup)
where
    P: Attraction + Clone,
{
    let touched = selected
        .iter()
        .any(|poi| group.contains_exact(poi.name()));
    if !touched {
        return;
    }
    for member in group.members() {
        if selected.iter().any(|poi| poi.name() == member) {
            continue;
        }
        let Some(poi) = available.iter().find(|poi| poi.name() == member) else {
            debug!(
                "No available POI for {member:?}; {} stays partial",
                group.name()
            );
            continue;
        };
        debug!("Added {member:?} to complete {}", group.name());
        selected.push(poi.clone());
    }
}
