pub mod client;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod setup;
pub mod sheet;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::{LogNotifier, Notifier, SmtpNotifier};
use crate::error::AppError;
use crate::sheet::{MemorySheet, PgSheet, SheetStore};
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, sheet: Arc<dyn SheetStore>, notifier: Arc<dyn Notifier>) -> Router {
    let max_body_size = config.max_body_size;
    let admin_routes = config.admin_routes;

    let state: SharedState = Arc::new(AppState {
        config,
        sheet,
        notifier,
    });

    // Forms are posted cross-origin from a static site
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new().merge(routes::intake_routes());
    if admin_routes {
        router = router.merge(routes::admin_routes());
    }

    router
        .route("/health", axum::routing::get(health))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .with_state(state)
}

/// Postgres-backed sheet when a database is configured, otherwise an
/// in-memory one.
pub async fn connect_sheet(config: &Config) -> Result<Arc<dyn SheetStore>, String> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, submissions are kept in memory only");
        return Ok(Arc::new(MemorySheet::new(config.sheet_id.clone())));
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .map_err(|e| format!("Failed to connect to database: {e}"))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| format!("Failed to run migrations: {e}"))?;

    tracing::info!("Migrations applied");
    Ok(Arc::new(PgSheet::new(pool, config.sheet_id.clone())))
}

pub fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    match config.smtp.as_ref().map(SmtpNotifier::new) {
        Some(Ok(notifier)) => {
            tracing::info!("SMTP configured");
            Arc::new(notifier)
        }
        Some(Err(e)) => {
            tracing::warn!("SMTP not available: {e}");
            Arc::new(LogNotifier)
        }
        None => {
            tracing::warn!("SMTP not configured, notifications will only be logged");
            Arc::new(LogNotifier)
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
