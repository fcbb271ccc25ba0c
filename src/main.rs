use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::sync::Arc;

use minutes_relay::config::defaults;
use minutes_relay::{index, upload, HttpSummaryWebhook, RelayConfig, SummaryWebhook};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Load configuration
    let relay_config = RelayConfig::from_env();
    if !relay_config.is_relay_ready() {
        warn!("WEBHOOK_URL and/or JWT_SECRET not set: uploads will fail until both are configured");
    }

    let webhook: Arc<dyn SummaryWebhook> = Arc::new(HttpSummaryWebhook::new());

    // Server settings
    let host =
        std::env::var("MINUTES_RELAY_HOST").unwrap_or_else(|_| defaults::HOST.to_string());
    let port =
        std::env::var("MINUTES_RELAY_PORT").unwrap_or_else(|_| defaults::PORT.to_string());

    info!("Starting Minutes Relay server on http://{}:{}", host, port);
    if let Some(url) = &relay_config.webhook_url {
        info!("Forwarding uploads to {}", url);
    }
    info!(
        "Maximum upload size: {} bytes",
        relay_config.max_upload_bytes
    );

    let max_upload_bytes = relay_config.max_upload_bytes;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .app_data(web::Data::new(relay_config.clone()))
            .app_data(web::Data::from(webhook.clone()))
            .service(index)
            .service(upload)
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
