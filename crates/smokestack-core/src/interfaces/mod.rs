// crates/smokestack-core/src/interfaces/mod.rs
// ============================================================================
// Module: Engine Interfaces
// Description: Engine-agnostic container lifecycle contract.
// Purpose: Inject the container engine so the runner is testable without one.
// Dependencies: async-trait, thiserror
// ============================================================================

//! ## Overview
//! The harness uses, and never implements, a container engine. The contract
//! is four operations: launch, query state, fetch logs, terminate. Real
//! engines live in backend crates; unit tests drive the runner with stubs.
//!
//! ## Invariants
//! - At most one handle is live per test case.
//! - `terminate` is idempotent and safe after partial startup or exit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::core::case::TestCase;
use crate::core::image::ImageRef;
use crate::core::logs::ContainerLogs;

// ============================================================================
// SECTION: Engine Error
// ============================================================================

/// Failure reported by a container engine operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("container engine {operation} failed: {reason}")]
pub struct EngineError {
    /// Operation that failed (`launch`, `host port`, `logs`, `terminate`).
    operation: String,
    /// Engine-reported reason.
    reason: String,
}

impl EngineError {
    /// Creates an engine error for an operation.
    #[must_use]
    pub fn new(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Returns the failed operation name.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

// ============================================================================
// SECTION: Launch Request
// ============================================================================

/// Everything an engine needs to start one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Concrete image to launch.
    image: ImageRef,
    /// Command override, empty for the image default.
    command: Vec<String>,
    /// Environment variables applied to the container.
    env: Vec<(String, String)>,
    /// Container port to expose on the host, when the strategy needs one.
    exposed_port: Option<u16>,
}

impl LaunchRequest {
    /// Builds the launch request for a test case.
    #[must_use]
    pub fn from_case(case: &TestCase) -> Self {
        Self {
            image: case.image().clone(),
            command: case.command().to_vec(),
            env: case.env().to_vec(),
            exposed_port: case.strategy().exposed_port(),
        }
    }

    /// Returns the concrete image.
    #[must_use]
    pub const fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Returns the command override (empty for the image default).
    #[must_use]
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Returns the container environment variables.
    #[must_use]
    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    /// Returns the container port to expose, when any.
    #[must_use]
    pub const fn exposed_port(&self) -> Option<u16> {
        self.exposed_port
    }
}

// ============================================================================
// SECTION: Engine Contract
// ============================================================================

/// Live, test-owned reference to a running container.
#[async_trait]
pub trait ContainerHandle: Send + Sync {
    /// Returns the host port mapped to a container port.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the port was not exposed or the
    /// container is gone.
    async fn host_port(&self, container_port: u16) -> Result<u16, EngineError>;

    /// Returns the exit code, or `None` while the process is running.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the container state cannot be queried.
    async fn exit_code(&self) -> Result<Option<i64>, EngineError>;

    /// Fetches the captured container output.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the log streams cannot be read.
    async fn logs(&self) -> Result<ContainerLogs, EngineError>;

    /// Stops and removes the container. Idempotent; safe after exit.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when teardown fails; the container may
    /// still be reaped by the engine's own cleanup.
    async fn terminate(&self) -> Result<(), EngineError>;
}

/// Container engine capability injected into the runner.
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    /// Starts a container for the request and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] on pull or startup failure; launch errors
    /// are fatal to the test case, never retried.
    async fn launch(&self, request: &LaunchRequest) -> Result<Box<dyn ContainerHandle>, EngineError>;
}
