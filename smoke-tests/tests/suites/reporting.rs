// smoke-tests/tests/suites/reporting.rs
// ============================================================================
// Module: Reporting Tests
// Description: Artifact root creation and canonical summary writing.
// Purpose: Keep failure diagnostics on disk deterministic and inspectable.
// Dependencies: smoke-tests helpers, tempfile
// ============================================================================

//! ## Overview
//! Artifact root creation and canonical summary writing.
//! Purpose: Keep failure diagnostics on disk deterministic and inspectable.
//! Invariants:
//! - Summaries are canonical JSON and parse back to the written fields.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;
use std::time::Duration;

use smoke_tests::config::SmokeTestConfig;
use smokestack_core::CaseReport;

use crate::helpers::artifacts::CaseSummary;
use crate::helpers::artifacts::TestArtifacts;

fn run_root_config(root: &std::path::Path) -> SmokeTestConfig {
    SmokeTestConfig {
        run_root: Some(root.to_path_buf()),
        ..SmokeTestConfig::default()
    }
}

#[test]
fn summary_round_trips_through_canonical_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = run_root_config(dir.path());
    let artifacts = TestArtifacts::new("radarr_local", &config).expect("artifact root created");

    let report = CaseReport {
        application: "radarr".to_string(),
        image: "ghcr.io/example/radarr:local".to_string(),
        attempts: 4,
        waited: Duration::from_millis(1750),
    };
    let path = artifacts
        .write_json("summary.json", &CaseSummary::passed("radarr_local", &report))
        .expect("summary written");

    let raw = fs::read_to_string(path).expect("summary readable");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("summary parses");
    assert_eq!(value["application"], "radarr");
    assert_eq!(value["status"], "passed");
    assert_eq!(value["attempts"], 4);
    assert_eq!(value["waited_ms"], 1750);
    assert!(value["diagnostic"].is_null());
}

#[test]
fn failure_artifacts_carry_the_diagnostic_text() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = run_root_config(dir.path());
    let artifacts = TestArtifacts::new("imagemaid_local", &config).expect("artifact root created");

    let path = artifacts
        .write_text("failure.txt", "exited with code 2\nusage: imagemaid [flags]")
        .expect("failure text written");
    let raw = fs::read_to_string(path).expect("failure text readable");
    assert!(raw.contains("usage: imagemaid"));
    assert!(artifacts.root().ends_with("imagemaid_local"));
}

#[test]
fn artifact_roots_are_isolated_per_test() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = run_root_config(dir.path());
    let first = TestArtifacts::new("radarr_local", &config).expect("artifact root created");
    let second = TestArtifacts::new("sonarr_local", &config).expect("artifact root created");
    assert_ne!(first.root(), second.root());
}
