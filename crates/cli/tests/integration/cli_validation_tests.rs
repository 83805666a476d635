//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::{fixture_path, tarot_cmd};

#[test]
fn test_help_output() {
    tarot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tarot"))
        .stdout(predicate::str::contains("pools"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("strategy"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("reorder"));
}

#[test]
fn test_plan_help_output() {
    tarot_cmd()
        .args(["plan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--min-utilization"))
        .stdout(predicate::str::contains("--total-bps"))
        .stdout(predicate::str::contains("--input"));
}

#[test]
fn test_apply_help_output() {
    tarot_cmd()
        .args(["apply", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--private-key"));
}

#[test]
fn test_invalid_command() {
    tarot_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_pools_missing_addresses() {
    tarot_cmd()
        .args(["pools", "--rpc-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_pools_missing_rpc_url() {
    tarot_cmd()
        .args(["pools", "0x0000000000000000000000000000000000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc-url"));
}

#[test]
fn test_plan_requires_pools_or_input() {
    tarot_cmd()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_plan_pools_conflict_with_input() {
    tarot_cmd()
        .args([
            "plan",
            "0x0000000000000000000000000000000000000001",
            "--input",
            &fixture_path("mixed_utilization_pools"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_plan_on_chain_without_rpc_url() {
    tarot_cmd()
        .args(["plan", "0x0000000000000000000000000000000000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ETH_RPC_URL"));
}

#[test]
fn test_plan_invalid_pool_address() {
    tarot_cmd()
        .args(["plan", "not_an_address", "--rpc-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pool address"));
}

#[test]
fn test_invalid_output_format() {
    tarot_cmd()
        .args([
            "plan",
            "--input",
            &fixture_path("mixed_utilization_pools"),
            "--format",
            "invalid_format",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_apply_without_private_key() {
    tarot_cmd()
        .args([
            "apply",
            "0x0000000000000000000000000000000000000042",
            "--input",
            &fixture_path("plan"),
            "--rpc-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--private-key"));
}

#[test]
fn test_apply_invalid_strategy_address() {
    tarot_cmd()
        .args([
            "apply",
            "0x1234",
            "--input",
            &fixture_path("plan"),
            "--rpc-url",
            "http://127.0.0.1:9",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid strategy address"));
}

#[test]
fn test_apply_missing_plan_file() {
    tarot_cmd()
        .args([
            "apply",
            "0x0000000000000000000000000000000000000042",
            "--input",
            "/nonexistent/plan.json",
            "--rpc-url",
            "http://127.0.0.1:9",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_apply_dry_run_unreachable_rpc() {
    tarot_cmd()
        .args([
            "apply",
            "0x0000000000000000000000000000000000000042",
            "--input",
            &fixture_path("plan"),
            "--rpc-url",
            "http://127.0.0.1:9",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read strategy pools"));
}

#[test]
fn test_apply_rejects_empty_plan_before_reading_chain() {
    tarot_cmd()
        .args([
            "apply",
            "0x0000000000000000000000000000000000000042",
            "--input",
            &fixture_path("empty_plan"),
            "--rpc-url",
            "http://127.0.0.1:9",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid allocation plan"))
        .stderr(predicate::str::contains("Total basis points must be greater than zero"))
        .stderr(predicate::str::contains("strategy pools").not());
}

#[test]
fn test_pools_factory_requires_asset() {
    tarot_cmd()
        .args([
            "pools",
            "--factory",
            "0x35C052bBf8338b06351782A565aa9AaD173432eA",
            "--rpc-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--asset"));
}

#[test]
fn test_pools_addresses_conflict_with_factory() {
    tarot_cmd()
        .args([
            "pools",
            "0x0000000000000000000000000000000000000001",
            "--factory",
            "0x35C052bBf8338b06351782A565aa9AaD173432eA",
            "--asset",
            "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83",
            "--rpc-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_pools_discovery_unreachable_rpc() {
    tarot_cmd()
        .args([
            "pools",
            "--factory",
            "0x35C052bBf8338b06351782A565aa9AaD173432eA",
            "--asset",
            "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83",
            "--rpc-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to discover lending pools"));
}

#[test]
fn test_info_missing_addresses() {
    tarot_cmd()
        .args(["info", "--rpc-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_info_unreachable_rpc() {
    tarot_cmd()
        .args([
            "info",
            "0x9cDED654472788a143C2285A6b2a580392510688",
            "--rpc-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read pool info"));
}

#[test]
fn test_strategy_missing_address() {
    tarot_cmd()
        .args(["strategy", "--rpc-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_strategy_unreachable_rpc() {
    tarot_cmd()
        .args([
            "strategy",
            "0x0000000000000000000000000000000000000042",
            "--rpc-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read strategy state"));
}

#[test]
fn test_reorder_dry_run_needs_no_rpc_or_key() {
    let output = tarot_cmd()
        .args([
            "--format",
            "json",
            "reorder",
            "0x0000000000000000000000000000000000000042",
            "--dry-run",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "reorder failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["strategy"], "0x0000000000000000000000000000000000000042");
    let calldata = value["calldata"].as_str().unwrap();
    assert!(calldata.starts_with("0x"));
    assert_eq!(calldata.len(), 10);
}

#[test]
fn test_reorder_without_private_key() {
    tarot_cmd()
        .args([
            "reorder",
            "0x0000000000000000000000000000000000000042",
            "--rpc-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--private-key"));
}

#[test]
fn test_reorder_without_rpc_url() {
    tarot_cmd()
        .args(["reorder", "0x0000000000000000000000000000000000000042"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc-url"));
}
