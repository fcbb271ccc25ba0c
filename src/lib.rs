// Minutes Relay Library
//
// This crate provides a small HTTP front end for meeting-minutes generation.
// It serves an upload page, signs each forwarded request with a short-lived
// HS256 bearer token, and relays audio uploads to an external webhook.

pub mod config;
pub mod error;
pub mod handlers;
pub mod relay;
pub mod token;

// Re-export common types for easier access
pub use config::RelayConfig;
pub use error::RelayError;
pub use handlers::{index, upload};
pub use relay::{HttpSummaryWebhook, SummaryWebhook, UploadPayload};
pub use token::{mint, mint_at, TokenError, TOKEN_TTL_SECS};
