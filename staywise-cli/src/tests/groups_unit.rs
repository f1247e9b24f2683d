//! Unit tests for the `groups` command.

use super::helpers::Workspace;
use super::*;
use crate::groups::{GroupsArgs, GroupsConfig, execute_groups};
use rstest::rstest;

#[rstest]
fn converting_groups_without_city_errors() {
    let err = GroupsConfig::try_from(GroupsArgs::default()).expect_err("missing city");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CITY);
            assert_eq!(env, ENV_GROUPS_CITY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn groups_lists_declared_groups_and_neighborhoods() {
    let workspace = Workspace::new();
    let config = GroupsConfig {
        city: "Granada".to_owned(),
        config: Some(workspace.granada_config()),
    };
    let mut stdout = Vec::new();

    execute_groups(&config, &mut stdout).expect("groups should succeed");

    let report: serde_json::Value = serde_json::from_slice(&stdout).expect("JSON report");
    let groups = report["groups"].as_array().expect("groups array");
    let names: Vec<&str> = groups
        .iter()
        .map(|group| group["name"].as_str().expect("group name"))
        .collect();
    assert_eq!(names, ["Alhambra Complex", "Cathedral Quarter"]);
    let neighborhoods = report["neighborhoods"].as_array().expect("neighborhood array");
    assert_eq!(neighborhoods.len(), 2);
}

#[rstest]
fn groups_for_unknown_city_is_empty() {
    let workspace = Workspace::new();
    let config = GroupsConfig {
        city: "Toledo".to_owned(),
        config: Some(workspace.granada_config()),
    };
    let mut stdout = Vec::new();

    execute_groups(&config, &mut stdout).expect("groups should succeed");

    let report: serde_json::Value = serde_json::from_slice(&stdout).expect("JSON report");
    assert_eq!(report["groups"], serde_json::json!([]));
    assert_eq!(report["neighborhoods"], serde_json::json!([]));
}
