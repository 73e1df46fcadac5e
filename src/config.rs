use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub admin_token: String,
    pub site_url: String,
    pub contact_phone: String,
    pub ga_measurement_id: String,
    pub ga_api_secret: String,
    pub analytics_debug: bool,
    pub session_ttl_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "nordia.db".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            site_url: env::var("SITE_URL").unwrap_or_else(|_| "https://nordia.com.ar".to_string()),
            contact_phone: env::var("CONTACT_PHONE")
                .unwrap_or_else(|_| "5493794281273".to_string()),
            ga_measurement_id: env::var("GA_MEASUREMENT_ID").unwrap_or_default(),
            ga_api_secret: env::var("GA_API_SECRET").unwrap_or_default(),
            analytics_debug: env::var("ANALYTICS_DEBUG")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// GA4 forwarding is only enabled when both credentials are present.
    pub fn ga_enabled(&self) -> bool {
        !self.ga_measurement_id.is_empty() && !self.ga_api_secret.is_empty()
    }
}
