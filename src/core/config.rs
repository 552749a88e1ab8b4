//! Site configuration.
//!
//! Public settings are baked in at compile time so the server-rendered page
//! and the WASM bundle agree on them. Set `LINGUA_BACKEND_URL` in the build
//! environment to point the capture form at the subscription
//! backend. Leave it unset to post to the site's own origin.

use crate::core::email_capture::{CaptureTiming, subscribe_url};

/// Configuration shared by the server and the browser bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Base URL of the subscription backend, without trailing slash.
    /// Empty means same origin.
    pub backend_url: String,

    /// Capture modal timing
    pub capture: CaptureTiming,
}

impl SiteConfig {
    /// Resolve configuration from build-time environment variables.
    pub fn from_build_env() -> Self {
        Self::with_backend(option_env!("LINGUA_BACKEND_URL").unwrap_or_default())
    }

    /// Build a configuration for the given backend with default timing.
    pub fn with_backend(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
            capture: CaptureTiming::default(),
        }
    }

    /// Check if a separate backend origin is configured
    pub fn has_backend(&self) -> bool {
        !self.backend_url.is_empty()
    }

    /// Full URL of the subscribe endpoint
    pub fn subscribe_url(&self) -> String {
        subscribe_url(&self.backend_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
