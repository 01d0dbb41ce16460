use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::config::StatusMode;
use crate::error::IntakeError;
use crate::models::Acknowledgement;
use crate::state::SharedState;
use crate::submission::{extract, pipeline};

pub const PROBE_MESSAGE: &str = "Contact Form API is running";

pub async fn submit(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    // An unreadable body still gets an acknowledgement, not a bare rejection
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = IntakeError::Body {
                status: rejection.status(),
                message: rejection.body_text(),
            };
            return failure(&state, err);
        }
    };

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let (fields, source) = extract::from_request(query.as_deref(), content_type, body).await;
    tracing::debug!(?source, "Extracted submission fields");

    match pipeline::run(&state, fields).await {
        Ok(_) => (StatusCode::OK, Json(Acknowledgement::accepted())).into_response(),
        Err(e) => failure(&state, e),
    }
}

fn failure(state: &SharedState, err: IntakeError) -> Response {
    tracing::error!("Error processing form submission: {err}");
    let status = match state.config.status_mode {
        StatusMode::Legacy => StatusCode::OK,
        StatusMode::Strict => err.status_code(),
    };
    (status, Json(Acknowledgement::failed(&err))).into_response()
}

pub async fn probe() -> Json<serde_json::Value> {
    Json(json!({
        "message": PROBE_MESSAGE,
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
