// smoke-tests/src/catalog.rs
// ============================================================================
// Module: Application Catalog
// Description: Table of applications covered by the smoke-test suites.
// Purpose: Parameterize one generic runner instead of duplicating test bodies.
// Dependencies: smokestack-core
// ============================================================================

//! ## Overview
//! Each row binds an application to its readiness check. Suites iterate or
//! pick rows and hand the derived [`TestCase`] to the generic runner; ports,
//! paths, and commands match what each upstream application ships.

// ============================================================================
// SECTION: Imports
// ============================================================================

use smokestack_core::HarnessError;
use smokestack_core::HttpProbe;
use smokestack_core::ImageCatalog;
use smokestack_core::ImageChannel;
use smokestack_core::ProcessExit;
use smokestack_core::ReadinessStrategy;
use smokestack_core::SymbolicRef;
use smokestack_core::TestCase;

use crate::config::SmokeTestConfig;

// ============================================================================
// SECTION: Table
// ============================================================================

/// Default registry base for catalog images.
pub const DEFAULT_REGISTRY: &str = "ghcr.io/example";

/// Readiness check kind for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Long-running HTTP service probed on a port and path.
    Http {
        /// Container port the service listens on.
        port: u16,
        /// Request path to probe.
        path: &'static str,
    },
    /// Run-to-completion tool checked by exit code.
    Exit {
        /// Command passed to the container.
        command: &'static [&'static str],
    },
}

/// One application row in the smoke-test table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Application name, also the image repository leaf.
    pub application: &'static str,
    /// Readiness check applied to the application.
    pub check: CheckKind,
}

/// The applications this repository smoke-tests.
pub const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        application: "radarr",
        check: CheckKind::Http {
            port: 7878,
            path: "/",
        },
    },
    CatalogEntry {
        application: "sonarr",
        check: CheckKind::Http {
            port: 8989,
            path: "/",
        },
    },
    CatalogEntry {
        application: "overseerr",
        check: CheckKind::Http {
            port: 5055,
            path: "/api/v1/status",
        },
    },
    CatalogEntry {
        application: "tautulli",
        check: CheckKind::Http {
            port: 8181,
            path: "/",
        },
    },
    CatalogEntry {
        application: "huntarr",
        check: CheckKind::Http {
            port: 9705,
            path: "/",
        },
    },
    CatalogEntry {
        application: "suggestarr",
        check: CheckKind::Http {
            port: 5000,
            path: "/",
        },
    },
    CatalogEntry {
        application: "recyclarr",
        check: CheckKind::Exit {
            command: &["--help"],
        },
    },
    CatalogEntry {
        application: "imagemaid",
        check: CheckKind::Exit {
            command: &["--help"],
        },
    },
];

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Finds a catalog entry by application name.
#[must_use]
pub fn entry(application: &str) -> Option<&'static CatalogEntry> {
    ENTRIES.iter().find(|candidate| candidate.application == application)
}

/// Builds the image catalog over the configured registry base.
#[must_use]
pub fn image_catalog(config: &SmokeTestConfig) -> ImageCatalog {
    let registry = config.registry.as_deref().unwrap_or(DEFAULT_REGISTRY);
    ENTRIES
        .iter()
        .fold(ImageCatalog::new(registry), |catalog, row| {
            catalog.with_application(row.application)
        })
}

// ============================================================================
// SECTION: Case Construction
// ============================================================================

/// Builds the test case for an application on a channel.
///
/// # Errors
///
/// Returns [`HarnessError::UnresolvedImage`] when the application is not in
/// the smoke-test table; resolution happens before anything is launched.
pub fn test_case(
    application: &str,
    channel: ImageChannel,
    config: &SmokeTestConfig,
) -> Result<TestCase, HarnessError> {
    let row = entry(application).ok_or_else(|| HarnessError::UnresolvedImage {
        reference: SymbolicRef::new(application, channel).to_string(),
        reason: format!("application `{application}` is not in the smoke-test table"),
    })?;
    let image = image_catalog(config).resolve(&SymbolicRef::new(application, channel))?;
    let strategy = match row.check {
        CheckKind::Http {
            port,
            path,
        } => ReadinessStrategy::HttpProbe(HttpProbe::new(port).with_path(path)),
        CheckKind::Exit {
            ..
        } => ReadinessStrategy::ProcessExit(ProcessExit::new()),
    };
    let timeout = config.effective_timeout(strategy.default_timeout());
    let mut case = TestCase::new(application, image, strategy).with_timeout(timeout);
    if let CheckKind::Exit {
        command,
    } = row.check
    {
        case = case.with_command(command.iter().copied());
    }
    Ok(case)
}
