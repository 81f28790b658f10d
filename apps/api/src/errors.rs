use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::archive::ArchiveError;
use crate::export::netlify::DeployError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Deploy error: {0}")]
    Deploy(#[from] DeployError),

    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),
}

/// Malformed JSON bodies. A body that parses but has the wrong shape is 422,
/// everything else (bad syntax, missing content type) is 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::UnprocessableEntity(e.body_text()),
            other => AppError::Validation(other.body_text()),
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Render(e) => (StatusCode::BAD_REQUEST, "UNKNOWN_THEME", e.to_string()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Failed to parse resume. Please try again.".to_string(),
                )
            }
            AppError::Deploy(e) => {
                tracing::warn!("Deploy failed: {e}");
                (StatusCode::BAD_GATEWAY, "DEPLOY_ERROR", e.to_string())
            }
            AppError::Archive(e) => {
                tracing::error!("Archive error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ARCHIVE_ERROR",
                    "Failed to create ZIP file".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_is_a_client_error_naming_the_value() {
        let (status, code, message) =
            AppError::from(RenderError::UnknownTheme("neon".into())).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "UNKNOWN_THEME");
        assert_eq!(message, "Unknown theme: neon");
    }

    #[test]
    fn test_llm_details_stay_server_side() {
        let (status, _, message) = AppError::Llm("upstream 503: overloaded".into()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("overloaded"));
    }

    #[test]
    fn test_deploy_failure_carries_provider_message() {
        let err = DeployError::CreateSite {
            status: 401,
            message: "Access Denied".into(),
        };
        let (status, code, message) = AppError::from(err).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "DEPLOY_ERROR");
        assert!(message.contains("Access Denied"));
    }
}
