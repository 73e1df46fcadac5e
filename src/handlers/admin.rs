use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries::{self, EventCount};
use crate::errors::AppError;
use crate::models::Lead;
use crate::state::AppState;

const DEFAULT_LEAD_LIMIT: i64 = 50;
const MAX_LEAD_LIMIT: i64 = 500;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() || token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/status
#[derive(Serialize)]
pub struct StatusResponse {
    active_sessions: usize,
    ga_enabled: bool,
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatusResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    Ok(Json(StatusResponse {
        active_sessions: state.sessions.len(),
        ga_enabled: state.config.ga_enabled(),
    }))
}

// GET /api/admin/leads
#[derive(Deserialize)]
pub struct LeadsQuery {
    pub limit: Option<i64>,
}

pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<LeadsQuery>,
) -> Result<Json<Vec<Lead>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let limit = query
        .limit
        .unwrap_or(DEFAULT_LEAD_LIMIT)
        .clamp(1, MAX_LEAD_LIMIT);

    let leads = {
        let db = state.db.lock().unwrap();
        queries::list_leads(&db, limit)?
    };
    Ok(Json(leads))
}

// GET /api/admin/leads/:id
pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Lead>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let lead = {
        let db = state.db.lock().unwrap();
        queries::get_lead(&db, &id)?
    };
    lead.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("lead {id}")))
}

// GET /api/admin/events/summary
#[derive(Serialize)]
pub struct EventSummary {
    total: i64,
    events: Vec<EventCount>,
}

pub async fn events_summary(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<EventSummary>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let events = {
        let db = state.db.lock().unwrap();
        queries::count_events_by_name(&db)?
    };
    let total = events.iter().map(|e| e.count).sum();
    Ok(Json(EventSummary { total, events }))
}
