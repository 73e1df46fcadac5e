use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::services::seo::{self, BlogPost, PageMetadata, PageType, SeoOverrides};
use crate::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SeoQuery {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub canonical: Option<String>,
    pub no_index: bool,
}

impl From<SeoQuery> for SeoOverrides {
    fn from(q: SeoQuery) -> Self {
        SeoOverrides {
            title: q.title,
            description: q.description,
            image: q.image,
            canonical: q.canonical,
            no_index: q.no_index,
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
pub struct SeoResponse {
    metadata: PageMetadata,
    json_ld: Vec<Value>,
}

// GET /api/seo/:page
pub async fn page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    Query(query): Query<SeoQuery>,
) -> Result<Json<SeoResponse>, AppError> {
    let page_type =
        PageType::parse(&page).ok_or_else(|| AppError::NotFound(format!("page {page}")))?;

    let metadata = seo::page_metadata(&state.site, &state.roi_model, page_type, &query.into());
    let json_ld = match page_type {
        PageType::Home => vec![
            seo::organization_schema(&state.site),
            seo::product_schema(&state.roi_model),
        ],
        PageType::Pricing => vec![seo::product_schema(&state.roi_model)],
        _ => vec![],
    };

    Ok(Json(SeoResponse { metadata, json_ld }))
}

// POST /api/seo/blog
pub async fn blog_post(
    State(state): State<Arc<AppState>>,
    Json(post): Json<BlogPost>,
) -> Json<SeoResponse> {
    Json(SeoResponse {
        metadata: seo::blog_post_metadata(&state.site, &post),
        json_ld: vec![seo::article_schema(&state.site, &post)],
    })
}

#[derive(Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

// POST /api/seo/faq
pub async fn faq(Json(entries): Json<Vec<FaqEntry>>) -> Json<Value> {
    let pairs: Vec<(String, String)> = entries
        .into_iter()
        .map(|e| (e.question, e.answer))
        .collect();
    Json(seo::faq_schema(&pairs))
}
