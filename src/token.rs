// JWT minting for Minutes Relay
//
// This module builds the short-lived HS256 bearer token that authorizes
// the outbound webhook call. It only mints tokens; verification is the
// webhook's concern.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Token lifetime in seconds (fixed design constant)
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Errors that can occur while minting a token
#[derive(Error, Debug)]
pub enum TokenError {
    /// The signing secret is missing or empty
    #[error("signing secret is empty")]
    EmptySecret,

    /// The claims could not be serialized
    #[error("failed to serialize token segment: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HMAC could not be keyed with the secret
    #[error("failed to key HMAC with secret")]
    InvalidKey,
}

/// JWT header, serialized field order is part of the wire format
#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

/// Token claims: issue time and expiry, nothing else
#[derive(Serialize)]
struct Claims {
    iat: i64,
    exp: i64,
}

/// Mints a token issued at the current wall-clock time.
pub fn mint(secret: &str) -> Result<String, TokenError> {
    mint_at(secret, Utc::now().timestamp())
}

/// Mints a token issued at an explicit unix time.
///
/// Pure function of (secret, iat): the same inputs always produce the same
/// token string. The expiry claim is always `iat + 3600`.
///
/// The output is `base64url(header).base64url(claims).base64url(signature)`
/// with base64url meaning the URL-safe alphabet and no padding, and the
/// signature being HMAC-SHA256 over the first two dot-joined segments.
pub fn mint_at(secret: &str, iat: i64) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let header = Header {
        alg: "HS256",
        typ: "JWT",
    };
    let claims = Claims {
        iat,
        exp: iat.saturating_add(TOKEN_TTL_SECS),
    };

    let encoded_header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?);
    let encoded_claims = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
    let message = format!("{}.{}", encoded_header, encoded_claims);

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| TokenError::InvalidKey)?;
    mac.update(message.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", message, signature))
}
