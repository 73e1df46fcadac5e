use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{BusinessProfile, ConversationState, DemoSession, Message};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    id: Uuid,
    state: ConversationState,
    profile: BusinessProfile,
    transcript: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<String>,
}

impl SessionResponse {
    fn new(session: DemoSession, reply: Option<String>) -> Self {
        Self {
            id: session.id,
            state: session.state,
            profile: session.profile,
            transcript: session.transcript,
            reply,
        }
    }
}

fn session_not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("demo session {id}"))
}

// POST /api/demo/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create();
    (StatusCode::CREATED, Json(SessionResponse::new(session, None)))
}

// GET /api/demo/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.get(&id).ok_or_else(|| session_not_found(&id))?;
    Ok(Json(SessionResponse::new(session, None)))
}

#[derive(Deserialize)]
pub struct SendMessage {
    pub text: String,
}

// POST /api/demo/sessions/:id/messages
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SendMessage>,
) -> Result<Json<SessionResponse>, AppError> {
    let outcome = state
        .sessions
        .send(&id, &payload.text)
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(SessionResponse::new(outcome.session, outcome.reply)))
}

// POST /api/demo/sessions/:id/reset
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.reset(&id).ok_or_else(|| session_not_found(&id))?;
    Ok(Json(SessionResponse::new(session, None)))
}
