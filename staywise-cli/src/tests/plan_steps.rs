//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{Workspace, day_names, write_utf8};
use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use staywise_core::AllocationError;
use std::cell::RefCell;

struct PlanWorld {
    workspace: Workspace,
    pois: RefCell<Option<Utf8PathBuf>>,
    config: RefCell<Option<Utf8PathBuf>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            pois: RefCell::new(None),
            config: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, days: usize) -> Vec<String> {
        let mut argv = vec!["staywise".to_owned(), "plan".to_owned()];
        if let Some(pois) = self.pois.borrow().as_ref() {
            argv.push(pois.as_str().to_owned());
        }
        argv.extend([
            format!("--{ARG_CITY}"),
            "Granada".to_owned(),
            format!("--{ARG_DAYS}"),
            days.to_string(),
        ]);
        if let Some(config) = self.config.borrow().as_ref() {
            argv.extend([format!("--{ARG_CONFIG}"), config.as_str().to_owned()]);
        }
        argv
    }

    fn run(&self, days: usize) {
        let invocation = self.build_command_line(days);
        let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
        let mut buffer = self.stdout.borrow_mut();
        let outcome = parsed.and_then(|cli| dispatch(cli, &mut *buffer));
        self.result.replace(Some(outcome));
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a Granada configuration exists on disk")]
fn granada_configuration_exists(#[from(world)] world: &PlanWorld) {
    world.config.replace(Some(world.workspace.granada_config()));
}

#[given("a POI file listing the Alhambra members and Albaicin sights")]
fn poi_file_exists(#[from(world)] world: &PlanWorld) {
    let path = world.workspace.granada_pois(&[
        "Generalife",
        "Mirador de San Nicolas",
        "Alhambra",
        "Banuelo",
        "Palace of Charles V",
    ]);
    world.pois.replace(Some(path));
}

#[given("I omit the POI path")]
fn omit_poi_path(#[from(world)] world: &PlanWorld) {
    world.pois.replace(None);
}

#[given("the POI file contains invalid JSON")]
fn poi_file_contains_invalid_json(#[from(world)] world: &PlanWorld) {
    let path = world.workspace.path("pois.json");
    write_utf8(&path, b"[ not valid json");
    world.pois.replace(Some(path));
}

#[when("I run the plan command for 2 days")]
fn run_plan_for_two_days(#[from(world)] world: &PlanWorld) {
    world.run(2);
}

#[when("I run the plan command for 0 days")]
fn run_plan_for_zero_days(#[from(world)] world: &PlanWorld) {
    world.run(0);
}

#[then("the command succeeds and prints JSON output")]
fn command_succeeds_and_prints_json(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("JSON plan");
    assert_eq!(report["city"], "Granada");
    assert_eq!(day_names(&report).len(), 2);
}

#[then("the Alhambra members share one day")]
fn alhambra_members_share_one_day(#[from(world)] world: &PlanWorld) {
    let report: serde_json::Value =
        serde_json::from_slice(&world.stdout.borrow()).expect("JSON plan");
    let days = day_names(&report);
    let members = ["Alhambra", "Generalife", "Palace of Charles V"];
    let holding: Vec<usize> = days
        .iter()
        .enumerate()
        .filter(|(_, day)| day.iter().any(|name| members.contains(&name.as_str())))
        .map(|(index, _)| index)
        .collect();
    assert_eq!(holding, vec![0]);
    assert_eq!(
        days,
        vec![
            vec!["Generalife", "Alhambra", "Palace of Charles V"],
            vec!["Mirador de San Nicolas", "Banuelo"],
        ]
    );
}

#[then("the command fails because the POI path is missing")]
fn command_fails_missing_poi_path(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_POIS),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the POI JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::ParsePois { .. } => {}
        other => panic!("expected ParsePois, found {other:?}"),
    }
}

#[then("the command fails because there are no days")]
fn command_fails_zero_days(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::Allocation(AllocationError::ZeroDays) => {}
        other => panic!("expected Allocation(ZeroDays), found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_happy_path, "planning a stay with compound attractions");
register_plan_scenario!(plan_missing_pois, "rejecting a missing POI path");
register_plan_scenario!(plan_invalid_json, "rejecting a POI file that is not JSON");
register_plan_scenario!(plan_zero_days, "rejecting a stay of zero days");
