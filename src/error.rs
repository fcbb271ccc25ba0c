// Error handling for Minutes Relay
//
// This module defines error types and handling for the relay.
// It centralizes error definitions and keeps internal detail out of
// client-facing responses: clients only ever see a generic message.

use thiserror::Error;

use actix_web::{HttpResponse, ResponseError};

use crate::token::TokenError;

/// Errors that can occur in the relay handlers
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required configuration value is missing or empty
    #[error("missing configuration value: {0}")]
    NotConfigured(&'static str),

    /// Error while minting the bearer token
    #[error("token minting failed: {0}")]
    Token(#[from] TokenError),

    /// The outbound webhook call could not be performed
    #[error("webhook request failed: {0}")]
    Upstream(String),

    /// The webhook answered with a non-success status
    #[error("webhook returned status {0}")]
    UpstreamStatus(u16),

    /// The webhook body was not valid JSON
    #[error("webhook returned malformed JSON: {0}")]
    MalformedResponse(String),
}

impl ResponseError for RelayError {
    // Plain-text bodies, always 500, never the underlying detail.
    // The Display form (with detail) is for server-side logs only.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RelayError::NotConfigured(_) | RelayError::Token(TokenError::EmptySecret) => {
                "Server not configured"
            }
            _ => "Upload failed",
        };
        HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}
