// smoke-tests/tests/helpers/docker.rs
// ============================================================================
// Module: Docker Preflight
// Description: Fast failure when no container engine is reachable.
// Purpose: Turn a missing daemon into a clear message instead of a hang.
// Dependencies: std::process
// ============================================================================

/// Checks that a docker daemon answers before any image is pulled.
///
/// # Errors
///
/// Returns an error with the daemon's stderr when `docker info` fails.
pub fn ensure_docker_available() -> Result<(), String> {
    let output = std::process::Command::new("docker")
        .arg("info")
        .output()
        .map_err(|err| format!("docker info failed: {err}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("docker info failed: {stderr}"));
    }
    Ok(())
}
