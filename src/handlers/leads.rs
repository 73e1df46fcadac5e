use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::analytics::FormSubmitted;
use crate::models::{AnalyticsEvent, Lead};
use crate::services::analytics;
use crate::services::validation::{validate_form, FieldType, FormField};
use crate::services::whatsapp::{self, LinkStyle};
use crate::state::AppState;

const FORM_ID: &str = "contact";
const FORM_NAME: &str = "Contacto";
const SERVER_CLIENT_ID: &str = "server";

#[derive(Deserialize)]
pub struct LeadRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    pub message: String,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Serialize)]
pub struct LeadResponse {
    id: String,
    whatsapp_url: String,
}

// POST /api/leads
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LeadRequest>,
) -> Result<(StatusCode, Json<LeadResponse>), AppError> {
    let email = req.email.as_deref().unwrap_or("");
    let fields = [
        FormField {
            name: "name",
            value: &req.name,
            field_type: FieldType::Name,
            required: true,
        },
        FormField {
            name: "email",
            value: email,
            field_type: FieldType::Email,
            required: false,
        },
        FormField {
            name: "phone",
            value: &req.phone,
            field_type: FieldType::Phone,
            required: true,
        },
        FormField {
            name: "message",
            value: &req.message,
            field_type: FieldType::Message,
            required: true,
        },
    ];

    if let Err(errors) = validate_form(&fields) {
        tracing::info!(fields = ?errors.keys().collect::<Vec<_>>(), "lead rejected");
        record_submission(&state, false).await;
        return Err(AppError::Validation(errors));
    }

    let phone = whatsapp::normalize_argentine_phone(&req.phone)
        .unwrap_or_else(|_| whatsapp::digits_only(&req.phone));
    let name = req.name.trim().to_string();
    let message = req.message.trim().to_string();

    let lead = Lead {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        email: Some(email.trim().to_string()).filter(|e| !e.is_empty()),
        phone,
        message,
        source: req.source.unwrap_or_else(|| FORM_ID.to_string()),
        created_at: chrono::Utc::now().naive_utc(),
    };

    {
        let db = state.db.lock().unwrap();
        queries::insert_lead(&db, &lead)?;
    }

    tracing::info!(lead_id = %lead.id, source = %lead.source, "lead stored");
    record_submission(&state, true).await;

    let text = format!("Hola! Soy {}. {}", lead.name, lead.message);
    let whatsapp_url = whatsapp::generate_link(&state.config.contact_phone, &text, LinkStyle::Web);

    Ok((
        StatusCode::CREATED,
        Json(LeadResponse {
            id: lead.id,
            whatsapp_url,
        }),
    ))
}

async fn record_submission(state: &Arc<AppState>, success: bool) {
    let event = AnalyticsEvent::FormSubmitted(FormSubmitted {
        form_id: FORM_ID.to_string(),
        form_name: FORM_NAME.to_string(),
        success,
    });
    if let Err(e) = analytics::track(state, SERVER_CLIENT_ID, event).await {
        tracing::error!(error = %e, "failed to record form submission");
    }
}
