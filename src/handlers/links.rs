use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::whatsapp::{self, LinkStyle, PredefinedMessage};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LinkQuery {
    pub message: Option<PredefinedMessage>,
    #[serde(default)]
    pub native: bool,
}

#[derive(Serialize)]
pub struct LinkResponse {
    url: String,
    phone_display: String,
    message: PredefinedMessage,
    text: String,
}

// GET /api/whatsapp/link
pub async fn link(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LinkQuery>,
) -> Json<LinkResponse> {
    let message = query.message.unwrap_or(PredefinedMessage::GeneralInquiry);
    let style = if query.native {
        LinkStyle::Native
    } else {
        LinkStyle::Web
    };
    let phone = &state.config.contact_phone;

    Json(LinkResponse {
        url: whatsapp::predefined_link(phone, message, &state.roi_model, style),
        phone_display: whatsapp::format_phone_display(phone),
        message,
        text: message.text(&state.roi_model),
    })
}

#[derive(Serialize)]
pub struct MessageEntry {
    key: PredefinedMessage,
    text: String,
}

// GET /api/whatsapp/messages
pub async fn messages(State(state): State<Arc<AppState>>) -> Json<Vec<MessageEntry>> {
    Json(
        PredefinedMessage::ALL
            .iter()
            .map(|m| MessageEntry {
                key: *m,
                text: m.text(&state.roi_model),
            })
            .collect(),
    )
}
