//! Axum route handlers for the Render API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::{ResumeData, ThemeMeta};
use crate::render::{generate_portfolio, themes};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub theme: String,
    /// `null` or absent renders an empty portfolio.
    #[serde(default)]
    pub data: Option<ResumeData>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub html: String,
}

/// POST /api/generate-portfolio
pub async fn handle_generate_portfolio(
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let data = request.data.unwrap_or_default();
    let html = generate_portfolio(&request.theme, &data)?;
    debug!(theme = %request.theme, bytes = html.len(), "Portfolio rendered");
    Ok(Json(GenerateResponse { html }))
}

/// GET /api/themes
pub async fn handle_list_themes() -> Json<&'static [ThemeMeta]> {
    Json(themes())
}
