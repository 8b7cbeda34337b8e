// crates/smokestack-core/src/core/report.rs
// ============================================================================
// Module: Readiness Outcome and Case Report
// Description: The result of a readiness wait and the pass record it yields.
// Purpose: Give the assertion layer a single value to turn into pass/fail.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The runner's wait phase produces exactly one [`ReadinessOutcome`], consumed
//! immediately by the assertion layer. Passing cases yield a serializable
//! [`CaseReport`] for artifact summaries; failing ones carry their diagnostic
//! logs in the outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::core::logs::ContainerLogs;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Why a readiness wait did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessFailure {
    /// No acceptable state was observed before the deadline.
    Timeout {
        /// Probe attempts made.
        attempts: u32,
        /// Last observed probe state.
        detail: String,
    },
    /// The container exited with an unexpected code.
    UnexpectedExitCode {
        /// Exit code the case expected.
        expected: i64,
        /// Exit code actually observed.
        actual: i64,
    },
    /// An acceptable status arrived but the body expectation failed.
    BodyMismatch {
        /// Substring the body was required to contain.
        expected: String,
    },
}

/// Result of one readiness wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessOutcome {
    /// The container became ready within the timeout.
    Ready {
        /// Probe attempts made before success.
        attempts: u32,
    },
    /// The container did not become ready; logs were captured for diagnosis.
    NotReady {
        /// Failure classification.
        failure: ReadinessFailure,
        /// Logs captured before termination.
        logs: ContainerLogs,
    },
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Pass record for one completed case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Application under test.
    pub application: String,
    /// Concrete image that was launched.
    pub image: String,
    /// Probe attempts made before success.
    pub attempts: u32,
    /// Total time spent waiting for readiness.
    pub waited: Duration,
}
