//! `plan` command: split a city's POIs into ordered days.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use staywise_core::{CompoundPlanner, MatchPolicy, PointOfInterest};

use crate::{
    ARG_CITY, ARG_CONFIG, ARG_DAYS, ARG_HONOUR_EXCLUSIONS, ARG_OUTPUT, ARG_POIS, ARG_QUOTA,
    CliError, DEFAULT_QUOTA_PER_DAY, ENV_PLAN_CITY, ENV_PLAN_DAYS, ENV_PLAN_POIS, load_store,
    require_existing, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Split the POIs of one city across the days of a stay. \
                 Compound attractions flagged must_visit_together stay on \
                 one day, days are balanced by POI count, and each day is \
                 ordered by neighborhood. The POI file is a JSON array of \
                 records with at least a name.",
    about = "Plan a multi-day city stay"
)]
#[ortho_config(prefix = "STAYWISE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON array of POI records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) pois: Option<Utf8PathBuf>,
    /// City the POIs belong to.
    #[arg(long = ARG_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Number of days in the city.
    #[arg(long = ARG_DAYS, value_name = "count")]
    #[serde(default)]
    pub(crate) days: Option<usize>,
    /// Advisory target of POIs per day.
    #[arg(long = ARG_QUOTA, value_name = "count")]
    #[serde(default)]
    pub(crate) quota: Option<usize>,
    /// Compound attractions document; defaults to the standard search list.
    #[arg(long = ARG_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) config: Option<Utf8PathBuf>,
    /// Write the plan to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Never match a POI to a group that lists it as excluded.
    #[arg(long = ARG_HONOUR_EXCLUSIONS)]
    #[serde(default)]
    pub(crate) honour_exclusions: bool,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) pois: Utf8PathBuf,
    pub(crate) city: String,
    pub(crate) days: usize,
    pub(crate) quota: usize,
    pub(crate) config: Option<Utf8PathBuf>,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) policy: MatchPolicy,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let pois = args.pois.ok_or(CliError::MissingArgument {
            field: ARG_POIS,
            env: ENV_PLAN_POIS,
        })?;
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_CITY,
            env: ENV_PLAN_CITY,
        })?;
        let days = args.days.ok_or(CliError::MissingArgument {
            field: ARG_DAYS,
            env: ENV_PLAN_DAYS,
        })?;
        let policy = if args.honour_exclusions {
            MatchPolicy::HonourExclusions
        } else {
            MatchPolicy::Lenient
        };
        Ok(Self {
            pois,
            city,
            days,
            quota: args.quota.unwrap_or(DEFAULT_QUOTA_PER_DAY),
            config: args.config,
            output: args.output,
            policy,
        })
    }
}

/// Plan document written by the command.
#[derive(Debug, Serialize)]
pub(crate) struct PlanReport<'a> {
    pub(crate) city: &'a str,
    pub(crate) status: String,
    pub(crate) days: Vec<Vec<PointOfInterest>>,
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_plan(&config, writer)
}

pub(crate) fn execute_plan(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.pois, ARG_POIS)?;
    let pois = load_pois(&config.pois)?;
    let (store, status) = load_store(config.config.as_deref());
    let planner = CompoundPlanner::new(&store).with_policy(config.policy);
    let days = planner.plan_city_stay(pois, &config.city, config.days, config.quota)?;
    info!(
        "Planned {} days for {} from {}",
        days.len(),
        config.city,
        config.pois
    );
    let report = PlanReport {
        city: &config.city,
        status: status.to_string(),
        days,
    };
    write_json(&report, config.output.as_deref(), writer)
}

/// Read a JSON array of POI records.
pub(crate) fn load_pois(path: &Utf8Path) -> Result<Vec<PointOfInterest>, CliError> {
    let text = staywise_fs::read_utf8_file(path).map_err(|source| CliError::ReadSource {
        field: ARG_POIS,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParsePois {
        path: path.to_path_buf(),
        source,
    })
}
