// crates/smokestack-docker/src/lib.rs
// ============================================================================
// Module: Smokestack Docker Engine
// Description: testcontainers-backed implementation of the engine interface.
// Purpose: Provide the real container engine for gated integration runs.
// Dependencies: smokestack-core, testcontainers, tokio
// ============================================================================

//! ## Overview
//! This crate adapts the `testcontainers` library to the engine contract in
//! [`smokestack_core::interfaces`]. It is the only crate that talks to a real
//! container engine; everything above it is engine-agnostic.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod engine;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use engine::DockerEngine;
