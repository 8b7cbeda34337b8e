// crates/smokestack-core/src/core/image.rs
// ============================================================================
// Module: Image References
// Description: Symbolic and concrete container image references.
// Purpose: Resolve human-meaningful tags to concrete, pullable images.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Tests name images symbolically (`radarr:local`); the catalog resolves the
//! symbolic form to a concrete `repository:tag` reference. Resolution is a
//! pure function over the catalog contents and fails closed with
//! [`HarnessError::UnresolvedImage`] before any container is launched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::HarnessError;

// ============================================================================
// SECTION: Image Channel
// ============================================================================

/// Release channel a test case pulls its image from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageChannel {
    /// Image built by this repository's CI and tagged `local`.
    Local,
    /// Upstream rolling tag.
    Rolling,
}

impl ImageChannel {
    /// Returns the concrete image tag for this channel.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Rolling => "rolling",
        }
    }

    /// Parses a channel name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message when the name is not a known channel.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("rolling") {
            return Ok(Self::Rolling);
        }
        Err(format!("unknown image channel `{raw}` (expected `local` or `rolling`)"))
    }
}

impl fmt::Display for ImageChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// SECTION: Symbolic Reference
// ============================================================================

/// Human-meaningful image reference: an application name plus a channel.
///
/// # Invariants
/// - The wire form is `application:channel` (for example `radarr:local`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolicRef {
    /// Application name as listed in the catalog.
    application: String,
    /// Release channel to resolve.
    channel: ImageChannel,
}

impl SymbolicRef {
    /// Creates a symbolic reference from its parts.
    #[must_use]
    pub fn new(application: impl Into<String>, channel: ImageChannel) -> Self {
        Self {
            application: application.into(),
            channel,
        }
    }

    /// Parses the `application:channel` wire form.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnresolvedImage`] when the text is not of the
    /// form `application:channel` or names an unknown channel.
    pub fn parse(raw: &str) -> Result<Self, HarnessError> {
        let unresolved = |reason: String| HarnessError::UnresolvedImage {
            reference: raw.to_string(),
            reason,
        };
        let (application, channel) = raw
            .split_once(':')
            .ok_or_else(|| unresolved("expected `application:channel`".to_string()))?;
        if application.is_empty() {
            return Err(unresolved("application name is empty".to_string()));
        }
        let channel = ImageChannel::parse(channel).map_err(unresolved)?;
        Ok(Self::new(application, channel))
    }

    /// Returns the application name.
    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the release channel.
    #[must_use]
    pub const fn channel(&self) -> ImageChannel {
        self.channel
    }
}

impl fmt::Display for SymbolicRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.application, self.channel)
    }
}

// ============================================================================
// SECTION: Concrete Reference
// ============================================================================

/// Concrete, pullable image reference.
///
/// # Invariants
/// - The wire form is `repository:tag`; both parts are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Full repository path including the registry host.
    repository: String,
    /// Image tag.
    tag: String,
}

impl ImageRef {
    /// Creates a concrete image reference from its parts.
    #[must_use]
    pub fn new(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: tag.into(),
        }
    }

    /// Returns the repository path.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the image tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Catalog of applications resolvable against a registry base.
///
/// # Invariants
/// - Resolution is pure: identical inputs yield identical references.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageCatalog {
    /// Registry base, for example `ghcr.io/example`.
    registry: String,
    /// Application names known to the catalog.
    applications: Vec<String>,
}

impl ImageCatalog {
    /// Creates an empty catalog over a registry base.
    #[must_use]
    pub fn new(registry: impl Into<String>) -> Self {
        Self {
            registry: registry.into(),
            applications: Vec::new(),
        }
    }

    /// Adds an application to the catalog.
    #[must_use]
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.applications.push(application.into());
        self
    }

    /// Returns the registry base.
    #[must_use]
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Resolves a symbolic reference to a concrete image.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnresolvedImage`] when the application is not
    /// listed in the catalog.
    pub fn resolve(&self, symbolic: &SymbolicRef) -> Result<ImageRef, HarnessError> {
        if !self.applications.iter().any(|known| known == symbolic.application()) {
            return Err(HarnessError::UnresolvedImage {
                reference: symbolic.to_string(),
                reason: format!("application `{}` is not in the catalog", symbolic.application()),
            });
        }
        Ok(ImageRef::new(
            format!("{}/{}", self.registry, symbolic.application()),
            symbolic.channel().tag(),
        ))
    }
}
