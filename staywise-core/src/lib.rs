//! Attraction grouping and day allocation for multi-day city stays.
//!
//! The engine answers three questions for one city:
//! - which points of interest belong to the same physical complex and must
//!   share a day ([`GroupMatcher`], [`ensure_integrity`]);
//! - how to spread every POI over a fixed number of days without splitting a
//!   complex while keeping days balanced ([`DayAllocator`]);
//! - how to order one day's POIs so that each walking district is visited in
//!   one go ([`order_by_neighborhood`]).
//!
//! Configuration lives in an immutable [`ConfigStore`] loaded once at start
//! up. [`CompoundPlanner`] ties the pieces together behind a city-keyed API.
//!
//! Invariants:
//! - No POI is created, lost or duplicated by allocation or ordering.
//! - Members of a must-group placed by [`DayAllocator`] share one day.
//! - No global mutable state; a loaded store is safe to share across threads.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod allocator;
pub mod compound;
pub mod config;
pub mod integrity;
pub mod locality;
pub mod matcher;
pub mod planner;
pub mod poi;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use allocator::{
    AllocationError, CompoundPartition, CompoundUnit, DayAllocator, DayBucket, partition,
};
pub use compound::{
    CityConfig, CompoundGroup, DEFAULT_VISIT_DURATION_HOURS, Neighborhood, NeighborhoodMap,
};
pub use config::{
    CONFIG_FILE_NAME, CandidateFailure, ConfigError, ConfigStore, LoadStatus,
    default_candidate_paths,
};
pub use integrity::ensure_integrity;
pub use locality::order_by_neighborhood;
pub use matcher::{GroupMatch, GroupMatcher, MatchKind, MatchPolicy};
pub use planner::CompoundPlanner;
pub use poi::{Attraction, PointOfInterest};
