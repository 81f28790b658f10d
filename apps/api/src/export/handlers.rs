//! Axum route handlers for the Export API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::export::archive::build_portfolio_zip;
use crate::extract::AppJson;
use crate::state::AppState;

const ARCHIVE_FILENAME: &str = "portfolio.zip";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadZipRequest {
    #[serde(default)]
    pub html_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub html_content: String,
    #[serde(default)]
    pub site_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub success: bool,
    pub url: String,
    pub site_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/download-zip
///
/// Returns the portfolio as a `portfolio.zip` attachment holding `index.html`.
pub async fn handle_download_zip(
    AppJson(request): AppJson<DownloadZipRequest>,
) -> Result<Response, AppError> {
    if request.html_content.is_empty() {
        return Err(AppError::Validation("HTML content is required".to_string()));
    }

    let archive = build_portfolio_zip(&request.html_content)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{ARCHIVE_FILENAME}\""),
            ),
        ],
        archive,
    )
        .into_response())
}

/// POST /api/deploy-netlify
///
/// Creates a new Netlify site under the caller's token and deploys the page to it.
pub async fn handle_deploy_netlify(
    State(state): State<AppState>,
    AppJson(request): AppJson<DeployRequest>,
) -> Result<Json<DeployResponse>, AppError> {
    if request.token.is_empty() {
        return Err(AppError::Validation("Netlify token is required".to_string()));
    }
    if request.html_content.is_empty() {
        return Err(AppError::Validation("HTML content is required".to_string()));
    }

    let archive = build_portfolio_zip(&request.html_content)?;
    info!(bytes = archive.len(), "Deploying portfolio");

    let deployment = state
        .deployer
        .deploy(&request.token, request.site_name.as_deref(), archive)
        .await?;

    Ok(Json(DeployResponse {
        success: true,
        url: deployment.url,
        site_id: deployment.site_id,
    }))
}
