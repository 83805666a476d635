//! Allocation planning from recorded pool observations.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::{fixture_path, tarot_cmd};

fn plan_json(args: &[&str]) -> Value {
    let output = tarot_cmd()
        .args(["--format", "json", "plan"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "plan failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn weights(plan: &Value) -> Vec<u64> {
    plan["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["weightBps"].as_u64().unwrap())
        .collect()
}

#[test]
fn test_recorded_pools_json() {
    let fixture = fixture_path("fantom_wftm_pools");
    let plan = plan_json(&["--input", &fixture]);

    assert_eq!(plan["totalBps"], 10_000);
    assert_eq!(
        weights(&plan),
        vec![1102, 1095, 1082, 1076, 1064, 1053, 1035, 960, 769, 764]
    );
    assert_eq!(
        plan["entries"][0]["address"],
        "0x9cDED654472788a143C2285A6b2a580392510688"
    );
}

#[test]
fn test_recorded_pools_table() {
    tarot_cmd()
        .args(["plan", "--input", &fixture_path("fantom_wftm_pools")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight (bps)"))
        .stdout(predicate::str::contains("88.92%"))
        .stdout(predicate::str::contains("1102"))
        .stdout(predicate::str::contains("Total: 10000 bps"));
}

#[test]
fn test_low_utilization_pool_excluded() {
    let fixture = fixture_path("mixed_utilization_pools");
    let plan = plan_json(&["--input", &fixture]);

    let entries = plan["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0]["address"],
        "0x0000000000000000000000000000000000000001"
    );
    assert_eq!(
        entries[1]["address"],
        "0x0000000000000000000000000000000000000003"
    );
    assert_eq!(weights(&plan), vec![5891, 4109]);
}

#[test]
fn test_plan_output_feeds_apply() {
    let fixture = fixture_path("mixed_utilization_pools");
    let plan = plan_json(&["--input", &fixture]);

    let expected: Value =
        serde_json::from_str(&std::fs::read_to_string(fixture_path("plan")).unwrap()).unwrap();
    assert_eq!(plan, expected);
}

#[test]
fn test_custom_total_bps() {
    let fixture = fixture_path("mixed_utilization_pools");
    let plan = plan_json(&["--input", &fixture, "--total-bps", "1000000"]);

    assert_eq!(plan["totalBps"], 1_000_000);
    assert_eq!(weights(&plan).iter().sum::<u64>(), 1_000_000);
}

#[test]
fn test_lower_threshold_includes_all_pools() {
    let fixture = fixture_path("mixed_utilization_pools");
    let plan = plan_json(&["--input", &fixture, "--min-utilization", "10"]);

    let weights = weights(&plan);
    assert_eq!(weights.len(), 3);
    assert_eq!(weights.iter().sum::<u64>(), 10_000);
}

#[test]
fn test_no_pools_qualify() {
    tarot_cmd()
        .args([
            "plan",
            "--input",
            &fixture_path("mixed_utilization_pools"),
            "--min-utilization",
            "95",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pools qualified."));
}

#[test]
fn test_no_pools_qualify_json() {
    let fixture = fixture_path("mixed_utilization_pools");
    let plan = plan_json(&["--input", &fixture, "--min-utilization", "95"]);

    assert!(plan["entries"].as_array().unwrap().is_empty());
}

#[test]
fn test_threshold_out_of_range() {
    tarot_cmd()
        .args([
            "plan",
            "--input",
            &fixture_path("mixed_utilization_pools"),
            "--min-utilization",
            "101",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside [0, 100]"));
}

#[test]
fn test_zero_total_bps() {
    tarot_cmd()
        .args([
            "plan",
            "--input",
            &fixture_path("mixed_utilization_pools"),
            "--total-bps",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn test_malformed_observation_rejected() {
    tarot_cmd()
        .args(["plan", "--input", &fixture_path("liquidity_above_deposits")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("above total deposited"));
}

#[test]
fn test_unparseable_input() {
    tarot_cmd()
        .args(["plan", "--input", &fixture_path("plan")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
