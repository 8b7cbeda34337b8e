// smoke-tests/tests/helpers/artifacts.rs
// ============================================================================
// Module: Test Artifacts
// Description: Artifact helpers for smoke-test suites.
// Purpose: Create per-test run roots and write deterministic summaries.
// Dependencies: smoke-tests, serde, serde_jcs
// ============================================================================

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use smoke_tests::config::SmokeTestConfig;
use smokestack_core::CaseReport;
use smokestack_core::TestCase;

/// Summary written for each completed smoke case.
#[derive(Debug, Serialize)]
pub struct CaseSummary {
    /// Test name the summary belongs to.
    pub test_name: String,
    /// Application under test.
    pub application: String,
    /// Concrete image that was launched.
    pub image: String,
    /// `passed` or `failed`.
    pub status: String,
    /// Probe attempts made before success (zero on failure).
    pub attempts: u32,
    /// Milliseconds spent waiting for readiness (zero on failure).
    pub waited_ms: u128,
    /// Failure diagnostic including captured logs, when the case failed.
    pub diagnostic: Option<String>,
}

impl CaseSummary {
    /// Builds a passing summary from a case report.
    pub fn passed(test_name: &str, report: &CaseReport) -> Self {
        Self {
            test_name: test_name.to_string(),
            application: report.application.clone(),
            image: report.image.clone(),
            status: "passed".to_string(),
            attempts: report.attempts,
            waited_ms: report.waited.as_millis(),
            diagnostic: None,
        }
    }

    /// Builds a failing summary carrying the diagnostic text.
    pub fn failed(test_name: &str, case: &TestCase, diagnostic: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            application: case.application().to_string(),
            image: case.image().to_string(),
            status: "failed".to_string(),
            attempts: 0,
            waited_ms: 0,
            diagnostic: Some(diagnostic.to_string()),
        }
    }
}

/// Milliseconds since the unix epoch, for run-root naming.
fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

/// Default per-run artifact root under the cargo target directory.
fn default_run_root() -> PathBuf {
    let stamp = now_millis();
    PathBuf::from("target/smoke-tests").join(format!("run_{stamp}"))
}

/// Artifact manager for a single smoke test.
#[derive(Debug, Clone)]
pub struct TestArtifacts {
    /// Root directory all artifacts are written under.
    root: PathBuf,
}

impl TestArtifacts {
    /// Creates the artifact root for a test.
    pub fn new(test_name: &str, config: &SmokeTestConfig) -> io::Result<Self> {
        let base = config.run_root.clone().unwrap_or_else(default_run_root);
        let root = base.join(test_name);
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
        })
    }

    /// Returns the root directory for the test artifacts.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a JSON artifact using canonical JCS serialization.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        let bytes = serde_jcs::to_vec(value).map_err(|err| io::Error::other(err.to_string()))?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Writes a text artifact with UTF-8 encoding.
    pub fn write_text(&self, name: &str, value: &str) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, value.as_bytes())?;
        Ok(path)
    }
}
