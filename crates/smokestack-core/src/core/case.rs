// crates/smokestack-core/src/core/case.rs
// ============================================================================
// Module: Test Case
// Description: Immutable description of one container smoke test.
// Purpose: Parameterize the generic runner instead of duplicating test bodies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A test case binds an application name to a concrete image, an optional
//! command, a readiness strategy, and a timeout. Cases are built once with
//! `with_*` methods and never mutated afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::core::image::ImageRef;
use crate::core::readiness::ReadinessStrategy;

// ============================================================================
// SECTION: Test Case
// ============================================================================

/// Immutable smoke-test description.
///
/// # Invariants
/// - The image reference is concrete (already resolved).
/// - The timeout bounds the whole readiness wait, not a single attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Application name, used in diagnostics and reports.
    application: String,
    /// Concrete image to launch.
    image: ImageRef,
    /// Command override passed to the container, empty for the image default.
    command: Vec<String>,
    /// Environment variables applied to the container.
    env: Vec<(String, String)>,
    /// Readiness strategy applied after launch.
    strategy: ReadinessStrategy,
    /// Bound on the readiness wait.
    timeout: Duration,
}

impl TestCase {
    /// Creates a case with the strategy's default timeout.
    #[must_use]
    pub fn new(
        application: impl Into<String>,
        image: ImageRef,
        strategy: ReadinessStrategy,
    ) -> Self {
        let timeout = strategy.default_timeout();
        Self {
            application: application.into(),
            image,
            command: Vec::new(),
            env: Vec::new(),
            strategy,
            timeout,
        }
    }

    /// Overrides the container command.
    #[must_use]
    pub fn with_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command = command.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a container environment variable.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Overrides the readiness timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the application name.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the concrete image reference.
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

    /// Returns the readiness strategy.
    #[must_use]
    pub const fn strategy(&self) -> &ReadinessStrategy {
        &self.strategy
    }

    /// Returns the readiness timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
