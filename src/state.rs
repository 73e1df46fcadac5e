use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::models::RoiModel;
use crate::services::analytics::AnalyticsSink;
use crate::services::seo::SiteConfig;
use crate::services::sessions::SessionStore;

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub sessions: SessionStore,
    pub roi_model: RoiModel,
    pub site: SiteConfig,
    pub analytics: Box<dyn AnalyticsSink>,
}
