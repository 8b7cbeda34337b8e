// crates/smokestack-core/src/core/readiness.rs
// ============================================================================
// Module: Readiness Strategies
// Description: The two readiness policies a smoke test can apply.
// Purpose: Decide when a started container counts as "up" for test purposes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A long-running service is probed over HTTP until an acceptable status is
//! observed; a run-to-completion tool is waited on until its process exits
//! with the expected code. Both policies are bounded by the test case
//! timeout; the probing loops themselves live in [`crate::runtime`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default readiness timeout for HTTP-probed services (covers pull + start).
pub const DEFAULT_HTTP_READY_TIMEOUT: Duration = Duration::from_secs(120);

/// Default wait bound for run-to-completion containers.
pub const DEFAULT_EXIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default interval between readiness probe attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

// ============================================================================
// SECTION: Status Range
// ============================================================================

/// Inclusive range of HTTP status codes accepted as "ready".
///
/// # Invariants
/// - `min <= max`; the default accepts any 2xx or 3xx response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRange {
    /// Lowest acceptable status code.
    min: u16,
    /// Highest acceptable status code.
    max: u16,
}

impl StatusRange {
    /// Creates an inclusive status range.
    #[must_use]
    pub const fn new(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Returns true when the status code falls inside the range.
    #[must_use]
    pub const fn contains(self, status: u16) -> bool {
        self.min <= status && status <= self.max
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        Self::new(200, 399)
    }
}

// ============================================================================
// SECTION: HTTP Probe
// ============================================================================

/// Readiness policy for long-running HTTP services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpProbe {
    /// Container port the service listens on.
    port: u16,
    /// Request path, defaulting to `/`.
    path: String,
    /// Acceptable response statuses.
    status: StatusRange,
    /// Optional substring the response body must contain.
    body_substring: Option<String>,
    /// Interval between probe attempts.
    poll_interval: Duration,
}

impl HttpProbe {
    /// Creates a probe for a container port with default path and statuses.
    #[must_use]
    pub fn new(port: u16) -> Self {
        Self {
            port,
            path: "/".to_string(),
            status: StatusRange::default(),
            body_substring: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Overrides the request path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Overrides the acceptable status range.
    #[must_use]
    pub const fn with_status(mut self, status: StatusRange) -> Self {
        self.status = status;
        self
    }

    /// Requires the response body to contain a substring.
    #[must_use]
    pub fn with_body_substring(mut self, needle: impl Into<String>) -> Self {
        self.body_substring = Some(needle.into());
        self
    }

    /// Overrides the interval between probe attempts.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Returns the container port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the acceptable status range.
    #[must_use]
    pub const fn status(&self) -> StatusRange {
        self.status
    }

    /// Returns the required body substring, when set.
    #[must_use]
    pub fn body_substring(&self) -> Option<&str> {
        self.body_substring.as_deref()
    }

    /// Returns the probe interval.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

// ============================================================================
// SECTION: Process Exit
// ============================================================================

/// Readiness policy for run-to-completion containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessExit {
    /// Exit code that counts as success.
    expected_code: i64,
}

impl ProcessExit {
    /// Creates a policy expecting exit code zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected_code: 0,
        }
    }

    /// Overrides the expected exit code.
    #[must_use]
    pub const fn with_expected_code(mut self, code: i64) -> Self {
        self.expected_code = code;
        self
    }

    /// Returns the expected exit code.
    #[must_use]
    pub const fn expected_code(self) -> i64 {
        self.expected_code
    }
}

impl Default for ProcessExit {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Strategy
// ============================================================================

/// Readiness strategy variants, one per test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStrategy {
    /// Poll an HTTP endpoint until an acceptable response is observed.
    HttpProbe(HttpProbe),
    /// Wait for the container process to exit with the expected code.
    ProcessExit(ProcessExit),
}

impl ReadinessStrategy {
    /// Returns the default timeout appropriate for this strategy.
    #[must_use]
    pub const fn default_timeout(&self) -> Duration {
        match self {
            Self::HttpProbe(_) => DEFAULT_HTTP_READY_TIMEOUT,
            Self::ProcessExit(_) => DEFAULT_EXIT_TIMEOUT,
        }
    }

    /// Returns the container port the engine must expose, when any.
    #[must_use]
    pub const fn exposed_port(&self) -> Option<u16> {
        match self {
            Self::HttpProbe(probe) => Some(probe.port()),
            Self::ProcessExit(_) => None,
        }
    }
}
