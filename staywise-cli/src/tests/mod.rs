//! Shared test harness modules for the Staywise CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod groups_unit;
mod helpers;
mod plan_steps;
