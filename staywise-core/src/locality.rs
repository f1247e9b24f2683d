//! Re-sequence a day's POIs so that neighbors visit back to back.

use crate::{Attraction, NeighborhoodMap};

/// Order `pois` by neighborhood.
///
/// POIs listed in a neighborhood are gathered into that neighborhood's
/// bucket, the first declared neighborhood winning when several list the
/// same name. Buckets follow declaration order and unmatched POIs come last.
/// Relative order inside each bucket is kept, and no POI is added or
/// dropped.
///
/// # Examples
/// ```
/// use staywise_core::{Neighborhood, NeighborhoodMap, order_by_neighborhood};
///
/// let map = NeighborhoodMap::new(vec![
///     Neighborhood::new("Albaicin", ["Mirador de San Nicolas", "Banuelo"]),
/// ]);
/// let day = vec!["Cathedral", "Banuelo", "Mirador de San Nicolas"];
///
/// let ordered = order_by_neighborhood(day, &map);
/// assert_eq!(ordered, ["Banuelo", "Mirador de San Nicolas", "Cathedral"]);
/// ```
#[must_use]
pub fn order_by_neighborhood<P: Attraction>(pois: Vec<P>, neighborhoods: &NeighborhoodMap) -> Vec<P> {
    if neighborhoods.is_empty() {
        return pois;
    }
    let mut buckets: Vec<Vec<P>> = neighborhoods.iter().map(|_| Vec::new()).collect();
    let mut unmatched = Vec::new();
    for poi in pois {
        neighborhoods
            .iter()
            .position(|neighborhood| neighborhood.contains(poi.name()))
            .and_then(|index| buckets.get_mut(index))
            .unwrap_or(&mut unmatched)
            .push(poi);
    }
    buckets.into_iter().flatten().chain(unmatched).collect()
}
