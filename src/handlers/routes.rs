// API route handlers for Minutes Relay
//
// This module contains the route handlers for the relay.
// It implements the upload endpoint and serves the upload page.

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::relay::{SummaryWebhook, UploadPayload};
use crate::token;
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::{error, info};
use serde_json::Value;

/// Handler for the upload page
///
/// Serves the single-page form that collects an audio recording and posts
/// it to the upload endpoint.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

/// Handler for upload relay requests
///
/// This endpoint receives the multipart form body from the browser, mints a
/// fresh bearer token, forwards the body unchanged to the configured webhook,
/// and returns the webhook's JSON response verbatim.
///
/// All failures are logged with detail here and reach the client only as a
/// generic plain-text message.
#[post("/api/upload")]
pub async fn upload(
    req: HttpRequest,
    body: web::Bytes,
    config: web::Data<RelayConfig>,
    webhook: web::Data<dyn SummaryWebhook>,
) -> Result<HttpResponse, RelayError> {
    match relay_upload(&req, body, &config, webhook.get_ref()).await {
        Ok(json) => Ok(HttpResponse::Ok().json(json)),
        Err(e) => {
            error!("Upload relay failed: {}", e);
            Err(e)
        }
    }
}

/// Relays one upload: validate configuration, mint a token, forward the body.
///
/// Exactly one outbound call per invocation, and none at all when the
/// configuration is incomplete.
async fn relay_upload(
    req: &HttpRequest,
    body: web::Bytes,
    config: &RelayConfig,
    webhook: &dyn SummaryWebhook,
) -> Result<Value, RelayError> {
    let url = config
        .webhook_url
        .as_deref()
        .ok_or(RelayError::NotConfigured("WEBHOOK_URL"))?;
    let secret = config
        .jwt_secret
        .as_deref()
        .ok_or(RelayError::NotConfigured("JWT_SECRET"))?;

    let token = token::mint(secret)?;

    // The body is passed through as received, boundary and all. The
    // Content-Type header travels with it so the webhook can parse the form.
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    info!("Relaying {} byte upload to webhook", body.len());
    let payload = UploadPayload {
        content_type,
        body: body.to_vec(),
    };
    webhook.forward(url, &token, payload).await
}
