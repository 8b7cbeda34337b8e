// crates/smokestack-core/src/core/logs.rs
// ============================================================================
// Module: Container Logs
// Description: Captured stdout/stderr of a container under test.
// Purpose: Carry failure diagnostics from the engine to the assertion layer.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Logs are captured before termination so diagnostics survive teardown. The
//! concatenated text form is what failure messages embed; when the engine
//! cannot deliver logs, a placeholder keeps the diagnostic non-empty.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Log Capture
// ============================================================================

/// Captured container output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerLogs {
    /// Captured standard output.
    stdout: String,
    /// Captured standard error.
    stderr: String,
}

impl ContainerLogs {
    /// Creates a capture from raw stream bytes (lossy UTF-8).
    #[must_use]
    pub fn from_bytes(stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }

    /// Creates a placeholder capture for when log retrieval itself failed.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("(container logs unavailable: {})", reason.into()),
        }
    }

    /// Returns the captured standard output.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns the captured standard error.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Returns both streams concatenated as diagnostic text.
    #[must_use]
    pub fn concatenated(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => format!("{}\n{}", self.stdout, self.stderr),
        }
    }

    /// Returns true when neither stream captured any output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }
}

impl fmt::Display for ContainerLogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.concatenated())
    }
}
