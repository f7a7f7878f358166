//! End-to-end handler tests against a temporary SQLite database.


use crate::config::AppConfig;
use crate::db;
use crate::state::AppState;
use actix_web::web;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_ADMIN_KEY: &str = "test-admin-key";

/// The `TempDir` must outlive the pool, so callers keep it bound.
pub async fn test_state(admin_key: Option<&str>) -> (TempDir, web::Data<AppState>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = db::init_pool(&database_url)
        .await
        .expect("Failed to create test pool");

    let config = AppConfig {
        port: 0,
        admin_key: admin_key.map(str::to_string),
        database_url,
        public_dir: PathBuf::from("public"),
    };

    (dir, web::Data::new(AppState::new(pool, config)))
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(1) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count query failed")
}

macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data($state.clone())
                .configure(|cfg| {
                    $crate::handlers::configure(cfg, std::path::Path::new("public"))
                }),
        )
        .await
    };
}
pub(crate) use test_app;

#[actix_web::test]
async fn health_always_ok() {
    let (_dir, state) = test_state(None).await;
    let app = test_app!(state);

    let req = actix_web::test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = actix_web::test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[actix_web::test]
async fn root_redirects_to_admin_page() {
    let (_dir, state) = test_state(None).await;
    let app = test_app!(state);

    let req = actix_web::test::TestRequest::get().uri("/").to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(actix_web::http::header::LOCATION).unwrap(),
        "/admin.html"
    );
}

#[actix_web::test]
async fn serves_admin_page_from_public_dir() {
    let (_dir, state) = test_state(None).await;
    let app = test_app!(state);

    let req = actix_web::test::TestRequest::get().uri("/admin.html").to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
