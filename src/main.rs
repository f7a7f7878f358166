mod config;
mod db;
mod error;
mod handlers;
mod intent;
mod models;
mod services;
mod state;

#[cfg(test)]
mod tests;

use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};
use config::AppConfig;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    if !config.provisioning_enabled() {
        tracing::warn!("ADMIN_KEY is not set; POST /api/business will reject every request");
    }

    let pool = db::init_pool(&config.database_url).await.map_err(|e| {
        tracing::error!(error = %e, database_url = %config.database_url, "failed to initialize SQLite pool");
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let port = config.port;
    let public_dir = config.public_dir.clone();
    let app_state = web::Data::new(AppState::new(pool, config));

    tracing::info!("Chatbot SaaS Starter listening on http://localhost:{}", port);
    tracing::info!("Admin UI: http://localhost:{}{}", port, handlers::ADMIN_PAGE);

    HttpServer::new(move || {
        let public_dir = public_dir.clone();
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(move |cfg| handlers::configure(cfg, &public_dir))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
