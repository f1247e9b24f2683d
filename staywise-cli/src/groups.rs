//! `groups` command: show a city's compound groups and neighborhoods.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use staywise_core::{CompoundGroup, NeighborhoodMap};

use crate::{ARG_CITY, ARG_CONFIG, CliError, ENV_GROUPS_CITY, load_store, write_json};

/// CLI arguments for the `groups` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show compound groups configured for a city")]
#[ortho_config(prefix = "STAYWISE")]
pub(crate) struct GroupsArgs {
    /// City to inspect.
    #[arg(long = ARG_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Compound attractions document; defaults to the standard search list.
    #[arg(long = ARG_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) config: Option<Utf8PathBuf>,
}

/// Resolved `groups` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupsConfig {
    pub(crate) city: String,
    pub(crate) config: Option<Utf8PathBuf>,
}

impl TryFrom<GroupsArgs> for GroupsConfig {
    type Error = CliError;

    fn try_from(args: GroupsArgs) -> Result<Self, Self::Error> {
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_CITY,
            env: ENV_GROUPS_CITY,
        })?;
        Ok(Self {
            city,
            config: args.config,
        })
    }
}

#[derive(Debug, Serialize)]
struct GroupsReport<'a> {
    city: &'a str,
    status: String,
    groups: &'a [CompoundGroup],
    neighborhoods: &'a NeighborhoodMap,
}

pub(crate) fn run_groups(args: GroupsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = GroupsConfig::try_from(merged)?;
    execute_groups(&config, writer)
}

pub(crate) fn execute_groups(config: &GroupsConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let (store, status) = load_store(config.config.as_deref());
    let report = GroupsReport {
        city: &config.city,
        status: status.to_string(),
        groups: store.groups(&config.city),
        neighborhoods: store.neighborhoods(&config.city),
    };
    write_json(&report, None, writer)
}
