// crates/smokestack-core/src/runtime/probe.rs
// ============================================================================
// Module: Readiness Waiting
// Description: Bounded polling loops for the two readiness strategies.
// Purpose: Decide readiness without arbitrary sleeps, capturing diagnostics.
// Dependencies: tokio, reqwest, tracing
// ============================================================================

//! ## Overview
//! Both loops poll on a bounded interval until the deadline derived from the
//! case timeout. Logs are collected while the container is still alive, so
//! every not-ready outcome carries its diagnostics out of the wait phase.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;
use std::time::Instant;

use tokio::time::sleep;
use tracing::debug;

use crate::core::case::TestCase;
use crate::core::error::HarnessError;
use crate::core::logs::ContainerLogs;
use crate::core::readiness::HttpProbe;
use crate::core::readiness::ProcessExit;
use crate::core::readiness::ReadinessStrategy;
use crate::core::report::ReadinessFailure;
use crate::core::report::ReadinessOutcome;
use crate::interfaces::ContainerHandle;
use crate::interfaces::EngineError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Timeout for one probe request; the case timeout bounds the whole wait.
const PROBE_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Interval between exit-code polls.
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(250);

// ============================================================================
// SECTION: Wait Dispatch
// ============================================================================

/// Waits for the case's readiness condition and returns the outcome.
///
/// # Errors
///
/// Returns [`HarnessError::Engine`] when the engine itself fails mid-wait;
/// not-ready conditions are reported inside the outcome, not as errors.
pub async fn wait_for_ready(
    handle: &dyn ContainerHandle,
    case: &TestCase,
) -> Result<ReadinessOutcome, HarnessError> {
    match case.strategy() {
        ReadinessStrategy::HttpProbe(probe) => wait_http(handle, case, probe).await,
        ReadinessStrategy::ProcessExit(exit) => wait_exit(handle, case, exit).await,
    }
}

// ============================================================================
// SECTION: HTTP Probe Loop
// ============================================================================

/// Polls the mapped endpoint until an acceptable response or the deadline.
async fn wait_http(
    handle: &dyn ContainerHandle,
    case: &TestCase,
    probe: &HttpProbe,
) -> Result<ReadinessOutcome, HarnessError> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_REQUEST_TIMEOUT)
        .build()
        .map_err(|err| EngineError::new("http probe", err.to_string()))?;
    let host_port = handle.host_port(probe.port()).await?;
    let url = format!("http://127.0.0.1:{host_port}{}", probe.path());
    let deadline = Instant::now() + case.timeout();
    let mut attempts: u32 = 0;
    let mut detail = "no response observed".to_string();
    loop {
        attempts = attempts.saturating_add(1);
        match client.get(&url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if probe.status().contains(status) {
                    if let Some(needle) = probe.body_substring() {
                        let body = response.text().await.unwrap_or_default();
                        if !body.contains(needle) {
                            let logs = collect_logs(handle).await;
                            return Ok(ReadinessOutcome::NotReady {
                                failure: ReadinessFailure::BodyMismatch {
                                    expected: needle.to_string(),
                                },
                                logs,
                            });
                        }
                    }
                    debug!(application = case.application(), attempts, status, "service ready");
                    return Ok(ReadinessOutcome::Ready {
                        attempts,
                    });
                }
                detail = format!("last response status {status}");
                debug!(application = case.application(), status, "service not ready yet");
            }
            Err(err) => {
                detail = format!("last probe error: {err}");
                debug!(application = case.application(), error = %err, "probe attempt failed");
            }
        }
        if Instant::now() >= deadline {
            let logs = collect_logs(handle).await;
            return Ok(ReadinessOutcome::NotReady {
                failure: ReadinessFailure::Timeout {
                    attempts,
                    detail,
                },
                logs,
            });
        }
        sleep(probe.poll_interval()).await;
    }
}

// ============================================================================
// SECTION: Exit Wait Loop
// ============================================================================

/// Polls the container state until the process exits or the deadline.
async fn wait_exit(
    handle: &dyn ContainerHandle,
    case: &TestCase,
    exit: &ProcessExit,
) -> Result<ReadinessOutcome, HarnessError> {
    let deadline = Instant::now() + case.timeout();
    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        if let Some(actual) = handle.exit_code().await? {
            if actual == exit.expected_code() {
                debug!(application = case.application(), code = actual, "process exited cleanly");
                return Ok(ReadinessOutcome::Ready {
                    attempts,
                });
            }
            let logs = collect_logs(handle).await;
            return Ok(ReadinessOutcome::NotReady {
                failure: ReadinessFailure::UnexpectedExitCode {
                    expected: exit.expected_code(),
                    actual,
                },
                logs,
            });
        }
        if Instant::now() >= deadline {
            let logs = collect_logs(handle).await;
            return Ok(ReadinessOutcome::NotReady {
                failure: ReadinessFailure::Timeout {
                    attempts,
                    detail: "process still running".to_string(),
                },
                logs,
            });
        }
        sleep(EXIT_POLL_INTERVAL).await;
    }
}

// ============================================================================
// SECTION: Log Capture
// ============================================================================

/// Fetches logs while the container is alive; never fails the wait itself.
async fn collect_logs(handle: &dyn ContainerHandle) -> ContainerLogs {
    match handle.logs().await {
        Ok(logs) => logs,
        Err(err) => {
            debug!(error = %err, "log retrieval failed");
            ContainerLogs::unavailable(err.to_string())
        }
    }
}
