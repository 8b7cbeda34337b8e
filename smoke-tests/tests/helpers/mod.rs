// smoke-tests/tests/helpers/mod.rs
// ============================================================================
// Module: Smoke Test Helpers
// Description: Shared helpers for Smokestack smoke-test suites.
// Purpose: Provide stub engines, stub services, artifacts, and glue.
// Dependencies: smoke-tests, smokestack-core, smokestack-docker
// ============================================================================

//! ## Overview
//! Shared helpers for Smokestack smoke-test suites.
//! Purpose: Provide stub engines, stub services, artifacts, and glue.
//! Invariants:
//! - Helpers never talk to a real engine unless the suite asked for it.
//! - Every container-backed run writes an artifact summary.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod artifacts;
pub mod docker;
pub mod logging;
pub mod smoke;
