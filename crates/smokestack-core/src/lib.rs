// crates/smokestack-core/src/lib.rs
// ============================================================================
// Module: Smokestack Core
// Description: Data model, engine interfaces, and runner for container smoke tests.
// Purpose: Provide the engine-agnostic harness consumed by smoke-test suites.
// Dependencies: serde, thiserror, async-trait, tokio, reqwest
// ============================================================================

//! ## Overview
//! Smokestack launches a pre-built container image per test case, waits for it
//! to become ready (HTTP probe or process exit), asserts the result, and
//! guarantees the container is terminated on every exit path.
//!
//! The container engine is an injected capability (see [`interfaces`]); the
//! generic runner in [`runtime`] is therefore unit-testable with a stub
//! engine, while real engines are exercised only in gated integration runs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::case::TestCase;
pub use crate::core::error::HarnessError;
pub use crate::core::image::ImageCatalog;
pub use crate::core::image::ImageChannel;
pub use crate::core::image::ImageRef;
pub use crate::core::image::SymbolicRef;
pub use crate::core::logs::ContainerLogs;
pub use crate::core::readiness::HttpProbe;
pub use crate::core::readiness::ProcessExit;
pub use crate::core::readiness::ReadinessStrategy;
pub use crate::core::readiness::StatusRange;
pub use crate::core::report::CaseReport;
pub use crate::core::report::ReadinessFailure;
pub use crate::core::report::ReadinessOutcome;
pub use crate::interfaces::ContainerEngine;
pub use crate::interfaces::ContainerHandle;
pub use crate::interfaces::EngineError;
pub use crate::interfaces::LaunchRequest;
