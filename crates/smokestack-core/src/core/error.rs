// crates/smokestack-core/src/core/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Failure kinds surfaced by a smoke-test run.
// Purpose: Map every failure path to a diagnostic the test runner can print.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every failure carries enough context to diagnose the run without rerunning
//! it: the variants that follow a launched container embed the captured logs
//! as text. Failures are never retried; each one fails exactly one test case.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::interfaces::EngineError;

// ============================================================================
// SECTION: Error Kinds
// ============================================================================

/// Failure kinds for a smoke-test case.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A symbolic image reference could not be resolved; nothing was launched.
    #[error("unresolved image reference `{reference}`: {reason}")]
    UnresolvedImage {
        /// Symbolic reference as given.
        reference: String,
        /// Why resolution failed.
        reason: String,
    },

    /// The engine failed to start the container (pull or bind failure).
    #[error("failed to launch `{image}`: {reason}")]
    Launch {
        /// Concrete image that failed to launch.
        image: String,
        /// Engine-reported reason.
        reason: String,
    },

    /// The readiness wait exceeded the case timeout.
    #[error(
        "`{application}` not ready after {waited_secs}s ({attempts} attempts): {detail}\n{logs}"
    )]
    ReadinessTimeout {
        /// Application under test.
        application: String,
        /// Seconds waited before giving up.
        waited_secs: u64,
        /// Probe attempts made.
        attempts: u32,
        /// Last observed probe state.
        detail: String,
        /// Captured container logs.
        logs: String,
    },

    /// The container exited with a code other than the expected one.
    #[error("`{application}` exited with code {actual} (expected {expected})\n{logs}")]
    UnexpectedExitCode {
        /// Application under test.
        application: String,
        /// Exit code the case expected.
        expected: i64,
        /// Exit code actually observed.
        actual: i64,
        /// Captured container logs.
        logs: String,
    },

    /// A response was observed but violated the case's expectations.
    #[error("readiness assertion failed for `{application}`: {reason}\n{logs}")]
    AssertionFailure {
        /// Application under test.
        application: String,
        /// Which expectation was violated.
        reason: String,
        /// Captured container logs.
        logs: String,
    },

    /// The engine failed mid-run (port lookup, log retrieval, state query).
    #[error(transparent)]
    Engine(#[from] EngineError),
}
