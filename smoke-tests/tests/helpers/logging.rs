// smoke-tests/tests/helpers/logging.rs
// ============================================================================
// Module: Test Logging
// Description: One-shot tracing subscriber initialization for test binaries.
// Purpose: Make harness probe/lifecycle events visible under RUST_LOG.
// Dependencies: tracing-subscriber
// ============================================================================

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}
