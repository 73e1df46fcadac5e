use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use nordia::config::AppConfig;
use nordia::db;
use nordia::handlers;
use nordia::models::RoiModel;
use nordia::services::analytics::ga4::Ga4Sink;
use nordia::services::analytics::log::LogSink;
use nordia::services::analytics::AnalyticsSink;
use nordia::services::conversation::DemoScript;
use nordia::services::seo::SiteConfig;
use nordia::services::sessions::SessionStore;
use nordia::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let analytics: Box<dyn AnalyticsSink> = if config.ga_enabled() {
        tracing::info!(measurement_id = %config.ga_measurement_id, "forwarding analytics to GA4");
        Box::new(Ga4Sink::new(
            config.ga_measurement_id.clone(),
            config.ga_api_secret.clone(),
        ))
    } else {
        tracing::info!(debug = config.analytics_debug, "logging analytics events only");
        Box::new(LogSink::new(config.analytics_debug))
    };

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        sessions: SessionStore::new(DemoScript::default(), config.session_ttl_minutes),
        roi_model: RoiModel::default(),
        site: SiteConfig::new(&config.site_url, &config.contact_phone),
        analytics,
    });

    let sweeper = Arc::clone(&state);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sweeper.sessions.sweep_expired();
        }
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/demo/sessions", post(handlers::demo::create_session))
        .route("/api/demo/sessions/:id", get(handlers::demo::get_session))
        .route(
            "/api/demo/sessions/:id/messages",
            post(handlers::demo::send_message),
        )
        .route(
            "/api/demo/sessions/:id/reset",
            post(handlers::demo::reset_session),
        )
        .route("/api/roi/calculate", post(handlers::roi::calculate))
        .route("/api/roi/ranges", get(handlers::roi::ranges))
        .route("/api/whatsapp/link", get(handlers::links::link))
        .route("/api/whatsapp/messages", get(handlers::links::messages))
        .route("/api/leads", post(handlers::leads::create_lead))
        .route("/api/events", post(handlers::events::ingest))
        .route("/api/seo/blog", post(handlers::seo::blog_post))
        .route("/api/seo/faq", post(handlers::seo::faq))
        .route("/api/seo/:page", get(handlers::seo::page))
        .route("/api/admin/status", get(handlers::admin::get_status))
        .route("/api/admin/leads", get(handlers::admin::list_leads))
        .route("/api/admin/leads/:id", get(handlers::admin::get_lead))
        .route(
            "/api/admin/events/summary",
            get(handlers::admin::events_summary),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
