// crates/smokestack-core/src/runtime/mod.rs
// ============================================================================
// Module: Harness Runtime
// Description: Generic runner and readiness waiting over an injected engine.
// Purpose: Execute start, wait, assert, terminate for one test case.
// Dependencies: tokio, reqwest, tracing
// ============================================================================

//! ## Overview
//! The runtime drives one test case sequentially: launch through the injected
//! engine, wait per the case's readiness strategy, terminate on every exit
//! path, then convert the outcome into pass or a diagnostic failure.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod probe;
pub mod runner;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use probe::wait_for_ready;
pub use runner::assert_ready;
pub use runner::run_case;
