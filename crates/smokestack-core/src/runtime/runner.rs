// crates/smokestack-core/src/runtime/runner.rs
// ============================================================================
// Module: Generic Case Runner
// Description: Start, wait, terminate, and assert for one test case.
// Purpose: Replace per-application test bodies with a single runner.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! `run_case` owns the container handle for exactly the duration of one case.
//! Termination runs on every exit path, including readiness failures and
//! engine errors raised mid-wait; a terminate error is logged and never masks
//! the readiness outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::warn;

use crate::core::case::TestCase;
use crate::core::error::HarnessError;
use crate::core::report::CaseReport;
use crate::core::report::ReadinessFailure;
use crate::core::report::ReadinessOutcome;
use crate::interfaces::ContainerEngine;
use crate::interfaces::LaunchRequest;
use crate::runtime::probe::wait_for_ready;

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Runs one smoke-test case to completion.
///
/// # Errors
///
/// Returns the case's [`HarnessError`] on launch failure, readiness timeout,
/// unexpected exit code, assertion failure, or an engine failure mid-wait.
/// The container is terminated before any of these are returned.
pub async fn run_case(
    engine: &dyn ContainerEngine,
    case: &TestCase,
) -> Result<CaseReport, HarnessError> {
    let request = LaunchRequest::from_case(case);
    debug!(application = case.application(), image = %case.image(), "launching container");
    let handle = engine.launch(&request).await.map_err(|err| HarnessError::Launch {
        image: case.image().to_string(),
        reason: err.to_string(),
    })?;
    let started = Instant::now();
    let outcome = wait_for_ready(handle.as_ref(), case).await;
    if let Err(err) = handle.terminate().await {
        warn!(application = case.application(), error = %err, "container terminate failed");
    }
    let waited = started.elapsed();
    assert_ready(case, outcome?, waited)
}

// ============================================================================
// SECTION: Assertion Layer
// ============================================================================

/// Converts a readiness outcome into pass or a diagnostic failure.
///
/// # Errors
///
/// Returns the failure mapped to its [`HarnessError`] kind, embedding the
/// captured logs as text. A test case is binary pass/fail.
pub fn assert_ready(
    case: &TestCase,
    outcome: ReadinessOutcome,
    waited: Duration,
) -> Result<CaseReport, HarnessError> {
    match outcome {
        ReadinessOutcome::Ready {
            attempts,
        } => Ok(CaseReport {
            application: case.application().to_string(),
            image: case.image().to_string(),
            attempts,
            waited,
        }),
        ReadinessOutcome::NotReady {
            failure,
            logs,
        } => {
            let logs = logs.concatenated();
            Err(match failure {
                ReadinessFailure::Timeout {
                    attempts,
                    detail,
                } => HarnessError::ReadinessTimeout {
                    application: case.application().to_string(),
                    waited_secs: waited.as_secs(),
                    attempts,
                    detail,
                    logs,
                },
                ReadinessFailure::UnexpectedExitCode {
                    expected,
                    actual,
                } => HarnessError::UnexpectedExitCode {
                    application: case.application().to_string(),
                    expected,
                    actual,
                    logs,
                },
                ReadinessFailure::BodyMismatch {
                    expected,
                } => HarnessError::AssertionFailure {
                    application: case.application().to_string(),
                    reason: format!("response body does not contain `{expected}`"),
                    logs,
                },
            })
        }
    }
}
