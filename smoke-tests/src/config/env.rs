// smoke-tests/src/config/env.rs
// ============================================================================
// Module: Smoke Test Environment
// Description: Environment-backed configuration for smoke tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, smokestack-core
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. The timeout override acts as
//! a floor so it never shortens an explicitly longer case timeout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use smokestack_core::ImageChannel;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for smoke-test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeTestEnv {
    /// Optional registry base override for image resolution.
    Registry,
    /// Optional default image channel (`local`/`rolling`).
    Channel,
    /// Optional timeout floor in seconds (positive integer).
    TimeoutSeconds,
    /// Optional artifact run root override.
    RunRoot,
}

impl SmokeTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registry => "SMOKESTACK_REGISTRY",
            Self::Channel => "SMOKESTACK_CHANNEL",
            Self::TimeoutSeconds => "SMOKESTACK_TEST_TIMEOUT_SEC",
            Self::RunRoot => "SMOKESTACK_RUN_ROOT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed smoke-test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmokeTestConfig {
    /// Optional registry base override.
    pub registry: Option<String>,
    /// Optional default image channel.
    pub channel: Option<ImageChannel>,
    /// Optional timeout floor.
    pub timeout: Option<Duration>,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
}

impl SmokeTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or channel name).
    pub fn load() -> Result<Self, String> {
        let registry = read_env_nonempty(SmokeTestEnv::Registry.as_str())?;
        let channel = read_env_nonempty(SmokeTestEnv::Channel.as_str())?
            .map(|value| {
                ImageChannel::parse(&value)
                    .map_err(|err| format!("{}: {err}", SmokeTestEnv::Channel.as_str()))
            })
            .transpose()?;
        let timeout = read_env_nonempty(SmokeTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SmokeTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SmokeTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        Ok(Self {
            registry,
            channel,
            timeout,
            run_root,
        })
    }

    /// Returns the requested timeout, raised to the configured floor.
    #[must_use]
    pub fn effective_timeout(&self, requested: Duration) -> Duration {
        self.timeout.map_or(requested, |floor| requested.max(floor))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
