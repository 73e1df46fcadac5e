use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use nordia::config::AppConfig;
use nordia::db;
use nordia::handlers;
use nordia::models::{AnalyticsEvent, RoiModel};
use nordia::services::analytics::AnalyticsSink;
use nordia::services::conversation::DemoScript;
use nordia::services::seo::SiteConfig;
use nordia::services::sessions::SessionStore;
use nordia::state::AppState;

// ── Mock Sinks ──

struct MockSink {
    forwarded: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl AnalyticsSink for MockSink {
    async fn forward(&self, client_id: &str, event: &AnalyticsEvent) -> anyhow::Result<()> {
        self.forwarded
            .lock()
            .unwrap()
            .push((client_id.to_string(), event.name().to_string()));
        Ok(())
    }
}

struct FailingSink;

#[async_trait]
impl AnalyticsSink for FailingSink {
    async fn forward(&self, _client_id: &str, _event: &AnalyticsEvent) -> anyhow::Result<()> {
        anyhow::bail!("GA4 unreachable")
    }
}

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        database_url: ":memory:".to_string(),
        admin_token: "test-token".to_string(),
        site_url: "https://nordia.com.ar".to_string(),
        contact_phone: "5493794281273".to_string(),
        ga_measurement_id: "".to_string(),
        ga_api_secret: "".to_string(),
        analytics_debug: false,
        session_ttl_minutes: 30,
    }
}

fn state_with_sink(analytics: Box<dyn AnalyticsSink>) -> Arc<AppState> {
    let config = test_config();
    let conn = db::init_db(":memory:").unwrap();
    Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        sessions: SessionStore::new(DemoScript::default(), config.session_ttl_minutes),
        roi_model: RoiModel::default(),
        site: SiteConfig::new(&config.site_url, &config.contact_phone),
        config,
        analytics,
    })
}

fn test_state() -> Arc<AppState> {
    test_state_with_forwarded().0
}

fn test_state_with_forwarded() -> (Arc<AppState>, Arc<Mutex<Vec<(String, String)>>>) {
    let forwarded = Arc::new(Mutex::new(vec![]));
    let sink = MockSink {
        forwarded: Arc::clone(&forwarded),
    };
    (state_with_sink(Box::new(sink)), forwarded)
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
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
        .with_state(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", "Bearer test-token")
        .body(Body::empty())
        .unwrap()
}

async fn read_json(res: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn create_session(state: &Arc<AppState>) -> String {
    let res = test_app(Arc::clone(state))
        .oneshot(json_request("POST", "/api/demo/sessions", Value::Null))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    read_json(res).await["id"].as_str().unwrap().to_string()
}

async fn send(state: &Arc<AppState>, id: &str, text: &str) -> Value {
    let res = test_app(Arc::clone(state))
        .oneshot(json_request(
            "POST",
            &format!("/api/demo/sessions/{id}/messages"),
            serde_json::json!({ "text": text }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    read_json(res).await
}

// ── Health ──

#[tokio::test]
async fn test_health() {
    let app = test_app(test_state());

    let res = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await["status"], "ok");
}

// ── Demo Conversation Tests ──

#[tokio::test]
async fn test_new_session_starts_idle_with_greeting() {
    let state = test_state();
    let app = test_app(Arc::clone(&state));

    let res = app
        .oneshot(json_request("POST", "/api/demo/sessions", Value::Null))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let json = read_json(res).await;
    assert_eq!(json["state"], "idle");
    assert_eq!(json["transcript"].as_array().unwrap().len(), 1);
    assert!(json["transcript"][0]["text"]
        .as_str()
        .unwrap()
        .starts_with("Hola, soy Nordia."));
    assert_eq!(state.sessions.len(), 1);
}

#[tokio::test]
async fn test_full_setup_walk() {
    let state = test_state();
    let id = create_session(&state).await;

    let json = send(&state, &id, "  SETUP  ").await;
    assert_eq!(json["state"], "collecting_name");
    assert_eq!(json["reply"], "Perfecto. ¿Cómo se llama tu negocio?");

    let json = send(&state, &id, "Barbería Sur").await;
    assert_eq!(json["state"], "collecting_hours");

    let json = send(&state, &id, "Lun a Sab 9-20").await;
    assert_eq!(json["state"], "collecting_services");

    let json = send(&state, &id, "Corte, Barba").await;
    assert_eq!(json["state"], "completed");
    assert_eq!(json["profile"]["name"], "Barbería Sur");
    assert_eq!(json["profile"]["hours"], "Lun a Sab 9-20");
    assert_eq!(json["profile"]["services"], "Corte, Barba");

    let json = send(&state, &id, "¿Qué servicios tienen?").await;
    assert_eq!(json["state"], "completed");
    let reply = json["reply"].as_str().unwrap();
    assert!(reply.starts_with("Servicios de Barbería Sur:\n- Corte, Barba"));
    assert!(reply.ends_with("Precio desde $8.500"));

    let json = send(&state, &id, "quiero un turno").await;
    assert_eq!(json["reply"], "¿Para qué día querés el turno?");
    assert_eq!(json["state"], "completed");

    // greeting + 6 exchanges
    assert_eq!(json["transcript"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn test_idle_ignores_other_input() {
    let state = test_state();
    let id = create_session(&state).await;

    let json = send(&state, &id, "hola").await;
    assert_eq!(json["state"], "idle");
    assert_eq!(json["reply"], "No entendí. Escribí 'setup' para empezar.");
    assert_eq!(json["profile"]["name"], "");
}

#[tokio::test]
async fn test_blank_message_is_ignored() {
    let state = test_state();
    let id = create_session(&state).await;

    let json = send(&state, &id, "   ").await;
    assert_eq!(json["state"], "idle");
    assert!(json.get("reply").is_none());
    assert_eq!(json["transcript"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_reset_session() {
    let state = test_state();
    let id = create_session(&state).await;
    send(&state, &id, "setup").await;
    send(&state, &id, "Barbería Sur").await;

    let res = test_app(Arc::clone(&state))
        .oneshot(json_request(
            "POST",
            &format!("/api/demo/sessions/{id}/reset"),
            Value::Null,
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["state"], "idle");
    assert_eq!(json["profile"]["name"], "");
    assert_eq!(json["transcript"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_session() {
    let state = test_state();
    let id = create_session(&state).await;
    send(&state, &id, "setup").await;

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri(format!("/api/demo/sessions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["state"], "collecting_name");
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = test_app(test_state());
    let id = uuid::Uuid::new_v4();

    let res = app
        .oneshot(json_request(
            "POST",
            &format!("/api/demo/sessions/{id}/messages"),
            serde_json::json!({ "text": "setup" }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── ROI Tests ──

#[tokio::test]
async fn test_roi_calculate() {
    let app = test_app(test_state());

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/roi/calculate",
            serde_json::json!({
                "daily_inquiries": 20,
                "average_ticket": 5000,
                "daily_hours_spent": 3
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["lost_sales"], 18);
    assert_eq!(json["opportunity_cost"], 90000.0);
    assert_eq!(json["monthly_savings"], 387000.0);
    assert_eq!(json["roi_percent"], 2150);
    assert_eq!(json["payback_days"], 2);
    assert_eq!(json["worthwhile"], true);
    assert_eq!(json["formatted"]["opportunity_cost"], "$90.000/mes");
    assert_eq!(json["formatted"]["monthly_savings"], "$387.000/mes");
    assert_eq!(json["formatted"]["monthly_service_cost"], "$18.000/mes");
}

#[tokio::test]
async fn test_roi_ranges() {
    let app = test_app(test_state());

    let res = app
        .oneshot(Request::builder().uri("/api/roi/ranges").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["fields"]["daily_inquiries"]["range"]["max"], 100.0);
    assert_eq!(json["fields"]["average_ticket"]["label"]["unit"], "ARS");
    assert_eq!(json["defaults"]["daily_inquiries"], 15.0);
    assert_eq!(json["prices"]["monthly"], 18000.0);
    assert_eq!(json["prices"]["founder_months"], 3);
}

// ── WhatsApp Link Tests ──

#[tokio::test]
async fn test_whatsapp_link_web_and_native() {
    let state = test_state();

    let res = test_app(Arc::clone(&state))
        .oneshot(
            Request::builder()
                .uri("/api/whatsapp/link?message=request_demo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    let url = json["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/5493794281273?text=Hola%21%20Me%20gustar"));
    assert_eq!(json["phone_display"], "+54 9 379 428-1273");

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/api/whatsapp/link?message=support&native=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = read_json(res).await;
    assert!(json["url"]
        .as_str()
        .unwrap()
        .starts_with("whatsapp://send?phone=5493794281273&text="));
}

#[tokio::test]
async fn test_whatsapp_messages_catalogue() {
    let app = test_app(test_state());

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/whatsapp/messages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = read_json(res).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[1]["key"], "founder_plan");
}

// ── Lead Tests ──

#[tokio::test]
async fn test_lead_validation_errors() {
    let (state, forwarded) = test_state_with_forwarded();
    let app = test_app(state);

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/leads",
            serde_json::json!({
                "name": "R2D2",
                "email": "no-arroba",
                "phone": "123",
                "message": "hola"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = read_json(res).await;
    assert_eq!(json["fields"]["name"], "El nombre no puede contener números");
    assert_eq!(
        json["fields"]["phone"],
        "El teléfono debe tener al menos 10 dígitos"
    );
    assert!(json["fields"]["email"].is_string());
    assert!(json["fields"]["message"].is_string());

    let forwarded = forwarded.lock().unwrap();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].1, "form_submitted");
}

#[tokio::test]
async fn test_lead_stored_and_listed() {
    let state = test_state();

    let res = test_app(Arc::clone(&state))
        .oneshot(json_request(
            "POST",
            "/api/leads",
            serde_json::json!({
                "name": "Juan Pérez",
                "phone": "379 4281273",
                "message": "Quiero saber más del plan founder",
                "source": "final_cta"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let json = read_json(res).await;
    let id = json["id"].as_str().unwrap().to_string();
    assert!(json["whatsapp_url"]
        .as_str()
        .unwrap()
        .starts_with("https://wa.me/5493794281273?text=Hola%21%20Soy%20Juan%20P%C3%A9rez."));

    let res = test_app(Arc::clone(&state))
        .oneshot(admin_request("/api/admin/leads"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let leads = read_json(res).await;
    assert_eq!(leads.as_array().unwrap().len(), 1);
    assert_eq!(leads[0]["phone"], "5493794281273");
    assert_eq!(leads[0]["source"], "final_cta");
    assert!(leads[0]["email"].is_null());

    let res = test_app(state)
        .oneshot(admin_request(&format!("/api/admin/leads/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await["name"], "Juan Pérez");
}

// ── Analytics Tests ──

#[tokio::test]
async fn test_event_ingest_and_summary() {
    let (state, forwarded) = test_state_with_forwarded();

    let res = test_app(Arc::clone(&state))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/events")
                .header("Content-Type", "application/json")
                .header("X-Client-Id", "client-42")
                .body(Body::from(
                    r#"{"event":"page_view","params":{"page_path":"/","page_title":"Nordia"}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    assert_eq!(
        forwarded.lock().unwrap().as_slice(),
        &[("client-42".to_string(), "page_view".to_string())]
    );

    let res = test_app(state)
        .oneshot(admin_request("/api/admin/events/summary"))
        .await
        .unwrap();
    let json = read_json(res).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["events"][0]["name"], "page_view");
}

#[tokio::test]
async fn test_event_with_bad_scroll_depth_is_rejected() {
    let app = test_app(test_state());

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/events",
            serde_json::json!({
                "event": "scroll_depth_reached",
                "params": { "depth_percentage": 60 }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_forwarding_failure_does_not_fail_request() {
    let state = state_with_sink(Box::new(FailingSink));

    let res = test_app(Arc::clone(&state))
        .oneshot(json_request(
            "POST",
            "/api/events",
            serde_json::json!({
                "event": "hero_cta_click",
                "params": { "button_text": "Probar demo" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::ACCEPTED);

    let res = test_app(state)
        .oneshot(admin_request("/api/admin/events/summary"))
        .await
        .unwrap();
    assert_eq!(read_json(res).await["total"], 1);
}

// ── SEO Tests ──

#[tokio::test]
async fn test_seo_home_has_json_ld() {
    let app = test_app(test_state());

    let res = app
        .oneshot(Request::builder().uri("/api/seo/home").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["metadata"]["canonical"], "https://nordia.com.ar");
    let ld = json["json_ld"].as_array().unwrap();
    assert_eq!(ld.len(), 2);
    assert_eq!(ld[0]["@type"], "Organization");
    assert_eq!(ld[0]["contactPoint"]["telephone"], "+54 9 379 428-1273");
    assert_eq!(ld[1]["@type"], "Product");
}

#[tokio::test]
async fn test_seo_unknown_page() {
    let app = test_app(test_state());

    let res = app
        .oneshot(Request::builder().uri("/api/seo/careers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seo_faq_schema() {
    let app = test_app(test_state());

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/seo/faq",
            serde_json::json!([
                { "question": "¿Necesito otro número?", "answer": "No, usás tu WhatsApp." }
            ]),
        ))
        .await
        .unwrap();

    let json = read_json(res).await;
    assert_eq!(json["@type"], "FAQPage");
    assert_eq!(json["mainEntity"][0]["name"], "¿Necesito otro número?");
}

#[tokio::test]
async fn test_seo_blog_post() {
    let app = test_app(test_state());

    let res = app
        .oneshot(json_request(
            "POST",
            "/api/seo/blog",
            serde_json::json!({
                "title": "Cómo responder más rápido",
                "description": "Guía para negocios",
                "published_at": "2024-03-01",
                "slug": "responder-rapido"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["json_ld"][0]["@type"], "Article");
    assert_eq!(json["json_ld"][0]["dateModified"], "2024-03-01");
}

// ── Admin API Tests ──

#[tokio::test]
async fn test_admin_requires_auth() {
    let app = test_app(test_state());

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/leads")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_wrong_token() {
    let app = test_app(test_state());

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/events/summary")
                .header("Authorization", "Bearer wrong-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_status_counts_sessions() {
    let state = test_state();
    create_session(&state).await;
    create_session(&state).await;

    let res = test_app(state)
        .oneshot(admin_request("/api/admin/status"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["active_sessions"], 2);
    assert_eq!(json["ga_enabled"], false);
}

#[tokio::test]
async fn test_admin_unknown_lead() {
    let app = test_app(test_state());

    let res = app
        .oneshot(admin_request("/api/admin/leads/missing"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
