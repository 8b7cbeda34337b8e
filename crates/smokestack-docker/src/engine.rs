// crates/smokestack-docker/src/engine.rs
// ============================================================================
// Module: Docker Engine
// Description: Launches and tears down containers through testcontainers.
// Purpose: Implement ContainerEngine/ContainerHandle against a real daemon.
// Dependencies: testcontainers, tokio, tracing
// ============================================================================

//! ## Overview
//! Containers are started without a library-side wait condition; readiness is
//! decided by the harness runtime. Termination stops and removes the
//! container and is idempotent: the handle gives up ownership on the first
//! call, so later calls are no-ops.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use smokestack_core::ContainerEngine;
use smokestack_core::ContainerHandle;
use smokestack_core::ContainerLogs;
use smokestack_core::EngineError;
use smokestack_core::LaunchRequest;
use testcontainers::ContainerAsync;
use testcontainers::ContainerRequest;
use testcontainers::GenericImage;
use testcontainers::ImageExt;
use testcontainers::core::IntoContainerPort;
use testcontainers::runners::AsyncRunner;
use tokio::sync::Mutex;
use tracing::debug;
use tracing::info;

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Container engine backed by the local docker daemon.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerEngine;

impl DockerEngine {
    /// Creates a docker-backed engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContainerEngine for DockerEngine {
    async fn launch(
        &self,
        request: &LaunchRequest,
    ) -> Result<Box<dyn ContainerHandle>, EngineError> {
        let mut image = GenericImage::new(request.image().repository(), request.image().tag());
        if let Some(port) = request.exposed_port() {
            image = image.with_exposed_port(port.tcp());
        }
        let mut container_request = ContainerRequest::from(image);
        if !request.command().is_empty() {
            container_request = container_request.with_cmd(request.command().iter().cloned());
        }
        for (key, value) in request.env() {
            container_request = container_request.with_env_var(key.clone(), value.clone());
        }
        let container = container_request
            .start()
            .await
            .map_err(|err| EngineError::new("launch", err.to_string()))?;
        info!(image = %request.image(), id = container.id(), "container started");
        Ok(Box::new(DockerHandle {
            container: Mutex::new(Some(container)),
        }))
    }
}

// ============================================================================
// SECTION: Handle
// ============================================================================

/// Handle over one running container; ownership ends at first terminate.
struct DockerHandle {
    /// Live container, taken out on termination.
    container: Mutex<Option<ContainerAsync<GenericImage>>>,
}

/// Engine error for operations attempted after termination.
fn gone(operation: &str) -> EngineError {
    EngineError::new(operation, "container already terminated")
}

#[async_trait]
impl ContainerHandle for DockerHandle {
    async fn host_port(&self, container_port: u16) -> Result<u16, EngineError> {
        let guard = self.container.lock().await;
        let container = guard.as_ref().ok_or_else(|| gone("host port"))?;
        container
            .get_host_port_ipv4(container_port.tcp())
            .await
            .map_err(|err| EngineError::new("host port", err.to_string()))
    }

    async fn exit_code(&self) -> Result<Option<i64>, EngineError> {
        let guard = self.container.lock().await;
        let container = guard.as_ref().ok_or_else(|| gone("exit code"))?;
        container.exit_code().await.map_err(|err| EngineError::new("exit code", err.to_string()))
    }

    async fn logs(&self) -> Result<ContainerLogs, EngineError> {
        let guard = self.container.lock().await;
        let container = guard.as_ref().ok_or_else(|| gone("logs"))?;
        let stdout = container
            .stdout_to_vec()
            .await
            .map_err(|err| EngineError::new("logs", err.to_string()))?;
        let stderr = container
            .stderr_to_vec()
            .await
            .map_err(|err| EngineError::new("logs", err.to_string()))?;
        Ok(ContainerLogs::from_bytes(&stdout, &stderr))
    }

    async fn terminate(&self) -> Result<(), EngineError> {
        let mut guard = self.container.lock().await;
        let Some(container) = guard.take() else {
            debug!("terminate called on an already-terminated container");
            return Ok(());
        };
        let id = container.id().to_string();
        container.stop().await.map_err(|err| EngineError::new("terminate", err.to_string()))?;
        container.rm().await.map_err(|err| EngineError::new("terminate", err.to_string()))?;
        info!(id = %id, "container terminated");
        Ok(())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
