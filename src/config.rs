// Minutes Relay configuration
//
// This module contains configuration structures and constants for the relay.
// It centralizes all configuration parameters and provides defaults from environment variables.

use std::env;

/// Default values for configuration
pub mod defaults {
    // Address the HTTP server binds to
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: &str = "8080";

    // Maximum accepted upload payload (512MB)
    pub const MAX_UPLOAD_BYTES: usize = 536870912;
}

/// Configuration for the relay handlers
///
/// The webhook URL and secret are optional at startup: the server runs
/// without them and reports a configuration error on each upload attempt,
/// so a deployment can come up before its secrets are wired in.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    /// Destination webhook URL for forwarded uploads
    pub webhook_url: Option<String>,
    /// Shared secret used to sign outbound bearer tokens
    pub jwt_secret: Option<String>,
    /// Maximum accepted upload payload in bytes
    pub max_upload_bytes: usize,
}

impl RelayConfig {
    /// Loads configuration from the environment.
    ///
    /// Empty-string values are treated the same as unset variables.
    pub fn from_env() -> Self {
        Self {
            webhook_url: non_empty_var("WEBHOOK_URL"),
            jwt_secret: non_empty_var("JWT_SECRET"),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::MAX_UPLOAD_BYTES),
        }
    }

    /// True when both the webhook URL and the secret are available
    pub fn is_relay_ready(&self) -> bool {
        self.webhook_url.is_some() && self.jwt_secret.is_some()
    }
}

/// Reads an environment variable, mapping empty values to None
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
