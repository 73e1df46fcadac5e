use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::AnalyticsEvent;
use crate::services::analytics;
use crate::state::AppState;

const CLIENT_ID_HEADER: &str = "x-client-id";

// POST /api/events
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(event): Json<AnalyticsEvent>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let client_id = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("anonymous")
        .to_string();

    let id = analytics::track(&state, &client_id, event).await?;
    Ok((StatusCode::ACCEPTED, Json(json!({ "id": id }))))
}
