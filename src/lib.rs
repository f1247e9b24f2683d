//! Facade crate for the Staywise attraction grouping engine.
//!
//! This crate re-exports the domain types and the city-keyed planner API of
//! `staywise-core`.

#![forbid(unsafe_code)]

pub use staywise_core::{
    AllocationError, Attraction, CONFIG_FILE_NAME, CandidateFailure, CityConfig, CompoundGroup,
    CompoundPartition, CompoundPlanner, CompoundUnit, ConfigError, ConfigStore, DayAllocator,
    DayBucket, GroupMatch, GroupMatcher, LoadStatus, MatchKind, MatchPolicy, Neighborhood,
    NeighborhoodMap, PointOfInterest, default_candidate_paths, ensure_integrity,
    order_by_neighborhood, partition,
};

#[cfg(feature = "test-support")]
pub use staywise_core::test_support;
