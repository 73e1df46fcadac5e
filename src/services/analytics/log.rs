use async_trait::async_trait;

use super::AnalyticsSink;
use crate::models::AnalyticsEvent;

/// Writes events to the log instead of sending them anywhere.
pub struct LogSink {
    debug: bool,
}

impl LogSink {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

#[async_trait]
impl AnalyticsSink for LogSink {
    async fn forward(&self, client_id: &str, event: &AnalyticsEvent) -> anyhow::Result<()> {
        if self.debug {
            tracing::info!(
                client_id,
                event = event.name(),
                params = %event.params(),
                "[analytics]"
            );
        }
        Ok(())
    }
}
