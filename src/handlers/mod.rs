// Minutes Relay HTTP handlers
//
// This module contains the HTTP handlers for the relay.
// It provides the interface between HTTP requests and the webhook relay.

pub mod routes;

// Re-export handlers for easier access
pub use self::routes::{index, upload};
