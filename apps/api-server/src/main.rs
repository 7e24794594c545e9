//! # Scribe API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{HttpServer, web};

mod app;
mod config;
mod docs;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;


use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&telemetry::TelemetryConfig::from_env());
    let config = AppConfig::from_env();

    tracing::info!(
        environment = ?config.environment,
        "Starting Scribe API Server on {}:{}",
        config.host,
        config.port
    );

    let state = web::Data::new(AppState::new(config.database.as_ref(), config.jwt.clone()).await);
    let key = middleware::session::session_key(&config.session);
    let bind = (config.host.clone(), config.port);

    HttpServer::new(move || app::build_app(state.clone(), config.clone(), key.clone()))
        .bind(bind)?
        .run()
        .await
}
