//! City-keyed API used by the itinerary builder.
//!
//! [`CompoundPlanner`] borrows a [`ConfigStore`] and resolves each call's
//! city before handing off to the matcher, enforcer, allocator and orderer.
//! Cities without configuration behave as having no groups and no
//! neighborhoods.

use crate::{
    AllocationError, Attraction, CompoundGroup, CompoundPartition, ConfigStore, DayAllocator,
    GroupMatcher, MatchPolicy, NeighborhoodMap, ensure_integrity, order_by_neighborhood, partition,
};

/// Engine entry points for one loaded configuration.
///
/// # Examples
/// ```
/// use staywise_core::{CompoundPlanner, ConfigStore, PointOfInterest};
///
/// let store = ConfigStore::from_json_str(
///     r#"{"Granada": {"Alhambra Complex": {
///         "included_attractions": ["Alhambra", "Generalife"],
///         "must_visit_together": true
///     }}}"#,
/// )
/// .expect("valid document");
/// let planner = CompoundPlanner::new(&store);
///
/// let pois = ["Generalife", "Albaicin", "Alhambra"].map(|n| PointOfInterest::new(n, "Granada"));
/// let days = planner
///     .split_pois_into_days(pois, "Granada", 2, 4)
///     .expect("two days");
/// assert_eq!(days[0].len(), 2);
/// assert_eq!(days[1][0].name, "Albaicin");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompoundPlanner<'store> {
    store: &'store ConfigStore,
    policy: MatchPolicy,
}

impl<'store> CompoundPlanner<'store> {
    /// Build a planner over `store` using [`MatchPolicy::Lenient`].
    #[must_use]
    pub const fn new(store: &'store ConfigStore) -> Self {
        Self {
            store,
            policy: MatchPolicy::Lenient,
        }
    }

    /// Use `policy` for every group lookup.
    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configuration this planner reads.
    #[must_use]
    pub const fn store(&self) -> &'store ConfigStore {
        self.store
    }

    /// A group matcher for `city` carrying this planner's policy.
    #[must_use]
    pub fn matcher(&self, city: &str) -> GroupMatcher<'store> {
        GroupMatcher::new(self.store.city(city)).with_policy(self.policy)
    }

    /// Compound groups configured for `city`.
    #[must_use]
    pub fn get_compound_groups(&self, city: &str) -> &'store [CompoundGroup] {
        self.store.groups(city)
    }

    /// The group `poi_name` belongs to in `city`.
    #[must_use]
    pub fn find_compound_group(&self, poi_name: &str, city: &str) -> Option<&'store CompoundGroup> {
        self.matcher(city).find_group(poi_name)
    }

    /// Split `pois` into must-group units and standalone POIs.
    #[must_use]
    pub fn group_pois_by_compound<P, I>(&self, pois: I, city: &str) -> CompoundPartition<P>
    where
        P: Attraction,
        I: IntoIterator<Item = P>,
    {
        partition(pois, &self.matcher(city))
    }

    /// Complete every must-group already touched by `selected`.
    ///
    /// See [`ensure_integrity`] for the exact rules.
    #[must_use]
    pub fn ensure_compound_integrity<P>(&self, selected: Vec<P>, available: &[P], city: &str) -> Vec<P>
    where
        P: Attraction + Clone,
    {
        ensure_integrity(selected, available, self.store.city(city))
    }

    /// Distribute a city's POIs over `num_days` days.
    ///
    /// `quota_per_day` is advisory and never bounds a day.
    ///
    /// # Errors
    /// Returns [`AllocationError::ZeroDays`] when `num_days` is zero.
    pub fn split_pois_into_days<P, I>(
        &self,
        all_pois: I,
        city: &str,
        num_days: usize,
        quota_per_day: usize,
    ) -> Result<Vec<Vec<P>>, AllocationError>
    where
        P: Attraction,
        I: IntoIterator<Item = P>,
    {
        let days = DayAllocator::new(self.matcher(city))
            .with_quota(quota_per_day)
            .split(all_pois, num_days)?;
        Ok(days.into_iter().map(crate::DayBucket::into_pois).collect())
    }

    /// Neighborhoods configured for `city`.
    #[must_use]
    pub fn get_neighborhood_tags(&self, city: &str) -> &'store NeighborhoodMap {
        self.store.neighborhoods(city)
    }

    /// Reorder one day's POIs so that each neighborhood is visited in one go.
    #[must_use]
    pub fn suggest_poi_order_by_neighborhood<P: Attraction>(&self, pois: Vec<P>, city: &str) -> Vec<P> {
        order_by_neighborhood(pois, self.store.neighborhoods(city))
    }

    /// Split a city's POIs into days, then order each day by neighborhood.
    ///
    /// # Errors
    /// Returns [`AllocationError::ZeroDays`] when `num_days` is zero.
    pub fn plan_city_stay<P, I>(
        &self,
        all_pois: I,
        city: &str,
        num_days: usize,
        quota_per_day: usize,
    ) -> Result<Vec<Vec<P>>, AllocationError>
    where
        P: Attraction,
        I: IntoIterator<Item = P>,
    {
        let days = self.split_pois_into_days(all_pois, city, num_days, quota_per_day)?;
        Ok(days
            .into_iter()
            .map(|day| self.suggest_poi_order_by_neighborhood(day, city))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointOfInterest;
    use crate::test_support::{granada_store, pois};
    use rstest::rstest;

    #[rstest]
    fn unknown_city_has_no_groups() {
        let store = granada_store();
        let planner = CompoundPlanner::new(&store);
        assert!(planner.get_compound_groups("Unknown").is_empty());
        assert!(planner.get_neighborhood_tags("Unknown").is_empty());
        assert!(planner.find_compound_group("Alhambra", "Unknown").is_none());
    }

    #[rstest]
    fn policy_reaches_group_lookups() {
        let store = granada_store();
        let lenient = CompoundPlanner::new(&store);
        let strict = lenient.with_policy(MatchPolicy::HonourExclusions);
        assert!(
            lenient
                .find_compound_group("Alhambra Palace Hotel", "Granada")
                .is_some()
        );
        assert!(
            strict
                .find_compound_group("Alhambra Palace Hotel", "Granada")
                .is_none()
        );
    }

    #[rstest]
    fn plan_orders_each_day_by_neighborhood() {
        let store = granada_store();
        let planner = CompoundPlanner::new(&store);
        let input = pois(
            "Granada",
            [
                "Corral del Carbon",
                "Alhambra",
                "Mirador de San Nicolas",
                "Generalife",
                "Banuelo",
                "Palace of Charles V",
            ],
        );

        let days: Vec<Vec<PointOfInterest>> = planner
            .plan_city_stay(input, "Granada", 2, 4)
            .expect("two days");

        let names: Vec<Vec<&str>> = days
            .iter()
            .map(|day| day.iter().map(|p| p.name.as_str()).collect())
            .collect();
        assert_eq!(
            names,
            [
                vec!["Alhambra", "Generalife", "Palace of Charles V"],
                vec!["Mirador de San Nicolas", "Banuelo", "Corral del Carbon"],
            ]
        );
    }

    #[rstest]
    fn zero_days_fails_fast() {
        let store = granada_store();
        let planner = CompoundPlanner::new(&store);
        let result = planner.split_pois_into_days(pois("Granada", ["Alhambra"]), "Granada", 0, 3);
        assert_eq!(result, Err(AllocationError::ZeroDays));
    }
}
