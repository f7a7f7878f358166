pub mod business;
pub mod demo;

use std::path::Path;

use actix_files::Files;
use actix_web::{error, http::header, web, HttpResponse};
use serde_json::json;

pub const ADMIN_PAGE: &str = "/admin.html";

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

pub async fn main() -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, ADMIN_PAGE))
        .finish()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected JSON body");
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": "invalid JSON body" })),
        )
        .into()
    })
}

/// Registers every route. Static files are mounted last so that the API and
/// demo routes take precedence.
pub fn configure(cfg: &mut web::ServiceConfig, public_dir: &Path) {
    cfg.app_data(json_config())
        .route("/", web::get().to(main))
        .route("/health", web::get().to(health_check))
        .route("/api/business", web::post().to(business::create_business))
        .route("/c/{slug}", web::get().to(demo::chatbot_page))
        .route("/c/{slug}/reply", web::post().to(demo::reply))
        .service(Files::new("/", public_dir));
}
