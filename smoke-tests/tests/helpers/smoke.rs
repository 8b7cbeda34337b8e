// smoke-tests/tests/helpers/smoke.rs
// ============================================================================
// Module: Smoke Run Glue
// Description: One generic entry point for container-backed smoke cases.
// Purpose: Resolve, run, and record a catalog application end-to-end.
// Dependencies: smoke-tests, smokestack-core, smokestack-docker
// ============================================================================

use smoke_tests::catalog;
use smoke_tests::config::SmokeTestConfig;
use smokestack_core::ImageChannel;
use smokestack_core::runtime::run_case;
use smokestack_docker::DockerEngine;
use tracing::info;

use crate::helpers::artifacts::CaseSummary;
use crate::helpers::artifacts::TestArtifacts;
use crate::helpers::docker::ensure_docker_available;
use crate::helpers::logging::init_tracing;

/// Runs one catalog application against the docker engine and records it.
///
/// `channel` pins the image channel; `None` defers to `SMOKESTACK_CHANNEL`
/// and falls back to the local build.
pub async fn run_app_smoke(application: &str, channel: Option<ImageChannel>) -> Result<(), String> {
    init_tracing();
    let config = SmokeTestConfig::load()?;
    ensure_docker_available()?;
    let channel = channel.or(config.channel).unwrap_or(ImageChannel::Local);
    let case =
        catalog::test_case(application, channel, &config).map_err(|err| err.to_string())?;
    let test_name = format!("{application}_{channel}");
    let artifacts = TestArtifacts::new(&test_name, &config).map_err(|err| err.to_string())?;
    let engine = DockerEngine::new();
    match run_case(&engine, &case).await {
        Ok(report) => {
            info!(application, attempts = report.attempts, "smoke case passed");
            let summary = CaseSummary::passed(&test_name, &report);
            let _ = artifacts.write_json("summary.json", &summary).map_err(|err| err.to_string())?;
            Ok(())
        }
        Err(err) => {
            let diagnostic = err.to_string();
            let _ =
                artifacts.write_text("failure.txt", &diagnostic).map_err(|err| err.to_string())?;
            let summary = CaseSummary::failed(&test_name, &case, &diagnostic);
            let _ =
                artifacts.write_json("summary.json", &summary).map_err(|err| err.to_string())?;
            Err(diagnostic)
        }
    }
}
