use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::sheet::{self, DEFAULT_LIST_LIMIT};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = match params.limit.as_deref() {
        None | Some("") => DEFAULT_LIST_LIMIT,
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            AppError::BadRequest("limit must be a non-negative integer".to_string())
        })?,
    };

    let submissions = sheet::list_recent(state.sheet.as_ref(), limit).await;

    Ok(Json(serde_json::json!({
        "submissions": submissions,
        "count": submissions.len(),
    })))
}
