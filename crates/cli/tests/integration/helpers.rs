//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Create a CLI command isolated from the caller's RPC and key settings.
pub fn tarot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tarot").unwrap();
    cmd.env_remove("ETH_RPC_URL").env_remove("PRIVATE_KEY");
    cmd
}

/// Absolute path of a fixture file.
pub fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}
