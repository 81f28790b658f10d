//! Axum route handlers for resume ingestion.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, HeaderMap},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::ingest::parser::parse_resume;
use crate::ingest::pdf::extract_document_text;
use crate::models::ResumeData;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub data: ResumeData,
    pub raw_text: String,
}

/// Parts of a multipart upload this endpoint reads. Other parts are ignored.
#[derive(Debug, Default)]
struct Upload {
    file: Option<Bytes>,
    text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/parse-resume
///
/// Accepts `multipart/form-data` with a `file` part (PDF or text) or a `text`
/// part, or a JSON body `{ "text": ... }`. A file wins over text.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let resume_text = if is_multipart(request.headers()) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        let upload = read_upload(multipart).await?;
        match (upload.file, upload.text) {
            (Some(file), _) => extract_document_text(file)
                .await
                .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?,
            (None, Some(text)) => text,
            (None, None) => String::new(),
        }
    } else {
        let AppJson(body) = AppJson::<ParseTextRequest>::from_request(request, &state).await?;
        body.text.unwrap_or_default()
    };

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("No resume text provided".to_string()));
    }

    info!(chars = resume_text.len(), "Parsing resume");
    let data = parse_resume(&resume_text, &state.llm).await?;

    Ok(Json(ParseResumeResponse {
        data,
        raw_text: resume_text,
    }))
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut upload = Upload::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        match field.name() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                upload.file = Some(bytes);
            }
            Some("text") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                upload.text = Some(text);
            }
            _ => {}
        }
    }
    Ok(upload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_multipart_detection_ignores_boundary() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("multipart/form-data; boundary=X-FOLIO"),
        );
        assert!(is_multipart(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_multipart(&headers));

        assert!(!is_multipart(&HeaderMap::new()));
    }

    #[test]
    fn test_response_uses_raw_text_key() {
        let body = serde_json::to_value(ParseResumeResponse {
            data: ResumeData::default(),
            raw_text: "Jane".into(),
        })
        .unwrap();
        assert_eq!(body["rawText"], "Jane");
        assert_eq!(body["data"]["skills"], serde_json::json!([]));
    }
}
