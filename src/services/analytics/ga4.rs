use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::AnalyticsSink;
use crate::models::AnalyticsEvent;

const MEASUREMENT_PROTOCOL_URL: &str = "https://www.google-analytics.com/mp/collect";

/// Google Analytics 4 Measurement Protocol.
pub struct Ga4Sink {
    measurement_id: String,
    api_secret: String,
    endpoint: String,
    client: reqwest::Client,
}

impl Ga4Sink {
    pub fn new(measurement_id: String, api_secret: String) -> Self {
        Self::with_endpoint(measurement_id, api_secret, MEASUREMENT_PROTOCOL_URL.to_string())
    }

    pub fn with_endpoint(measurement_id: String, api_secret: String, endpoint: String) -> Self {
        Self {
            measurement_id,
            api_secret,
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

pub fn payload(client_id: &str, event: &AnalyticsEvent, timestamp: &str) -> serde_json::Value {
    let mut params = event.params();
    if let Some(obj) = params.as_object_mut() {
        obj.insert("timestamp".to_string(), json!(timestamp));
    }

    json!({
        "client_id": client_id,
        "events": [{ "name": event.name(), "params": params }],
    })
}

#[async_trait]
impl AnalyticsSink for Ga4Sink {
    async fn forward(&self, client_id: &str, event: &AnalyticsEvent) -> anyhow::Result<()> {
        let timestamp = chrono::Utc::now().to_rfc3339();
        let body = payload(client_id, event, &timestamp);

        self.client
            .post(&self.endpoint)
            .query(&[
                ("measurement_id", self.measurement_id.as_str()),
                ("api_secret", self.api_secret.as_str()),
            ])
            .json(&body)
            .send()
            .await
            .context("failed to send GA4 event")?
            .error_for_status()
            .context("GA4 returned error")?;

        Ok(())
    }
}
