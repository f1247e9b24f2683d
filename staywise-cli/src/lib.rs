//! Command-line interface for the Staywise planning engine.
//!
//! `staywise plan` splits a JSON file of POIs into days for one city and
//! orders each day by neighborhood; `staywise groups` shows what the loaded
//! configuration knows about a city. Options layer CLI flags, configuration
//! files and `STAYWISE_*` environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde::Serialize;
use staywise_core::{ConfigStore, LoadStatus, default_candidate_paths};
use staywise_fs::FileProbe;

mod error;
mod groups;
mod plan;

pub use error::CliError;

use groups::GroupsArgs;
use plan::PlanArgs;

pub(crate) const ARG_POIS: &str = "pois";
pub(crate) const ARG_CITY: &str = "city";
pub(crate) const ARG_DAYS: &str = "days";
pub(crate) const ARG_QUOTA: &str = "quota";
pub(crate) const ARG_CONFIG: &str = "config";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_HONOUR_EXCLUSIONS: &str = "honour-exclusions";
pub(crate) const ENV_PLAN_POIS: &str = "STAYWISE_CMDS_PLAN_POIS";
pub(crate) const ENV_PLAN_CITY: &str = "STAYWISE_CMDS_PLAN_CITY";
pub(crate) const ENV_PLAN_DAYS: &str = "STAYWISE_CMDS_PLAN_DAYS";
pub(crate) const ENV_GROUPS_CITY: &str = "STAYWISE_CMDS_GROUPS_CITY";

/// Target POIs per day when `--quota` is not given.
pub(crate) const DEFAULT_QUOTA_PER_DAY: usize = 4;

/// Run the Staywise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or layered configuration are invalid,
/// inputs cannot be read, planning fails, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout)
}

fn dispatch(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Plan(args) => plan::run_plan(args, writer),
        Command::Groups(args) => groups::run_groups(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "staywise",
    about = "Group compound attractions and spread a city's POIs across days",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a city's POIs into days and order each day by neighborhood.
    Plan(PlanArgs),
    /// Show the compound groups and neighborhoods configured for a city.
    Groups(GroupsArgs),
}

/// Load the engine configuration from `explicit`, or from the default
/// candidates next to the binary and in the working directory.
pub(crate) fn load_store(explicit: Option<&Utf8Path>) -> (ConfigStore, LoadStatus) {
    explicit.map_or_else(
        || ConfigStore::load(default_candidate_paths(&binary_dir())),
        |path| ConfigStore::load([path]),
    )
}

fn binary_dir() -> Utf8PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
        .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match staywise_fs::probe_file(path) {
        Ok(FileProbe::File) => Ok(()),
        Ok(FileProbe::NotFile) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(FileProbe::Missing) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::ReadSource {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty JSON to `output`, or to `writer` when no output
/// file was requested.
pub(crate) fn write_json<T: Serialize>(
    value: &T,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    payload.push('\n');
    output
        .map_or_else(
            || writer.write_all(payload.as_bytes()),
            |path| staywise_fs::write_utf8_file(path, payload.as_bytes()),
        )
        .map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
