pub mod ga4;
pub mod log;

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::AnalyticsEvent;
use crate::state::AppState;

#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn forward(&self, client_id: &str, event: &AnalyticsEvent) -> anyhow::Result<()>;
}

/// Stores the event, then forwards it. Forwarding failures are logged and
/// never fail the request.
pub async fn track(
    state: &Arc<AppState>,
    client_id: &str,
    event: AnalyticsEvent,
) -> Result<i64, AppError> {
    let event = event.sanitized();

    let id = {
        let db = state.db.lock().unwrap();
        queries::insert_analytics_event(&db, client_id, event.name(), &event.params())?
    };

    if let Err(e) = state.analytics.forward(client_id, &event).await {
        tracing::error!(error = %e, event = event.name(), "failed to forward analytics event");
    }

    Ok(id)
}
