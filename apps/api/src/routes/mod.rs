pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::ingest::handlers as ingest;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Render API
        .route("/api/themes", get(render::handle_list_themes))
        .route(
            "/api/generate-portfolio",
            post(render::handle_generate_portfolio),
        )
        // Ingest API
        .route("/api/parse-resume", post(ingest::handle_parse_resume))
        // Export API
        .route("/api/download-zip", post(export::handle_download_zip))
        .route("/api/deploy-netlify", post(export::handle_deploy_netlify))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::export::netlify::{DeployError, Deployment, SiteDeployer};
    use crate::llm_client::LlmClient;

    #[derive(Default)]
    struct FakeDeployer {
        fail: bool,
        calls: Mutex<Vec<(String, Option<String>, Vec<u8>)>>,
    }

    #[async_trait]
    impl SiteDeployer for FakeDeployer {
        async fn deploy(
            &self,
            token: &str,
            site_name: Option<&str>,
            archive: Vec<u8>,
        ) -> Result<Deployment, DeployError> {
            self.calls.lock().unwrap().push((
                token.to_string(),
                site_name.map(str::to_string),
                archive,
            ));
            if self.fail {
                return Err(DeployError::Upload {
                    status: 422,
                    message: "Invalid zip".into(),
                });
            }
            Ok(Deployment {
                url: "https://jane.netlify.app".into(),
                site_id: "site-123".into(),
            })
        }
    }

    fn app_with(deployer: Arc<FakeDeployer>) -> Router {
        let deployer: Arc<dyn SiteDeployer> = deployer;
        let config = Config::for_tests();
        let llm = LlmClient::new(
            config.groq_api_key.clone(),
            config.groq_model.clone(),
            config.groq_api_url.clone(),
        )
        .unwrap();
        build_router(AppState {
            llm,
            deployer,
            config,
        })
    }

    fn app() -> Router {
        app_with(Arc::new(FakeDeployer::default()))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const BOUNDARY: &str = "folio-test-boundary";

    fn multipart(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, filename, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            let disposition = match filename {
                Some(f) => format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                ),
                None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"),
            };
            body.extend_from_slice(disposition.as_bytes());
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/parse-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_themes_catalogue() {
        let response = app()
            .oneshot(Request::get("/api/themes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let themes = body.as_array().unwrap();
        assert_eq!(themes.len(), 9);
        assert_eq!(themes[0]["id"], "minimal");
        assert_eq!(themes[8]["id"], "linear");
    }

    #[tokio::test]
    async fn test_generate_portfolio() {
        let request = post_json(
            "/api/generate-portfolio",
            json!({
                "theme": "minimal",
                "data": {
                    "name": "Jane Doe",
                    "title": "Engineer",
                    "skills": ["Go", "Rust"]
                }
            }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = json_body(response).await["html"].as_str().unwrap().to_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains(">Rust<"));
    }

    #[tokio::test]
    async fn test_generate_portfolio_without_data() {
        let request = post_json("/api/generate-portfolio", json!({ "theme": "bauhaus" }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_portfolio_unknown_theme() {
        let request = post_json(
            "/api/generate-portfolio",
            json!({ "theme": "neon", "data": {} }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_THEME");
        assert_eq!(body["error"]["message"], "Unknown theme: neon");
    }

    #[tokio::test]
    async fn test_generate_portfolio_rejects_malformed_data() {
        let request = post_json(
            "/api/generate-portfolio",
            json!({ "theme": "minimal", "data": { "experience": "ten years" } }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("experience"));
    }

    #[tokio::test]
    async fn test_invalid_json_syntax_uses_error_envelope() {
        for uri in [
            "/api/generate-portfolio",
            "/api/parse-resume",
            "/api/download-zip",
            "/api/deploy-netlify",
        ] {
            let request = Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"theme\": "))
                .unwrap();
            let response = app().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body = json_body(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_missing_json_content_type_uses_error_envelope() {
        let request = Request::post("/api/download-zip")
            .body(Body::from(r#"{"htmlContent":"<html></html>"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_resume_blank_json_text() {
        let request = post_json("/api/parse-resume", json!({ "text": "   \n" }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "No resume text provided");
    }

    #[tokio::test]
    async fn test_parse_resume_blank_multipart_text() {
        let request = multipart(&[("text", None, &b"  "[..])]);
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_resume_unsupported_file() {
        let request = multipart(&[("file", Some("photo.jpg"), &[0xffu8, 0xd8, 0xff, 0xe0][..])]);
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_download_zip() {
        let request = post_json(
            "/api/download-zip",
            json!({ "htmlContent": "<!DOCTYPE html><html></html>" }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/zip"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"portfolio.zip\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[tokio::test]
    async fn test_download_zip_requires_content() {
        let request = post_json("/api/download-zip", json!({ "htmlContent": "" }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "HTML content is required");
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let html = "x".repeat(Config::for_tests().max_upload_bytes + 1);
        let request = post_json("/api/download-zip", json!({ "htmlContent": html }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_deploy_netlify() {
        let fake = Arc::new(FakeDeployer::default());
        let request = post_json(
            "/api/deploy-netlify",
            json!({
                "token": "nfp_secret",
                "htmlContent": "<html></html>",
                "siteName": "Jane Doe"
            }),
        );
        let response = app_with(fake.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "success": true,
                "url": "https://jane.netlify.app",
                "siteId": "site-123"
            })
        );

        let calls = fake.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (token, site_name, archive) = &calls[0];
        assert_eq!(token, "nfp_secret");
        assert_eq!(site_name.as_deref(), Some("Jane Doe"));
        assert_eq!(&archive[..4], b"PK\x03\x04");
    }

    #[tokio::test]
    async fn test_deploy_netlify_requires_token() {
        let fake = Arc::new(FakeDeployer::default());
        let request = post_json(
            "/api/deploy-netlify",
            json!({ "htmlContent": "<html></html>" }),
        );
        let response = app_with(fake.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "Netlify token is required"
        );
        assert!(fake.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deploy_netlify_provider_failure() {
        let fake = Arc::new(FakeDeployer {
            fail: true,
            ..Default::default()
        });
        let request = post_json(
            "/api/deploy-netlify",
            json!({ "token": "t", "htmlContent": "<html></html>" }),
        );
        let response = app_with(fake).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let message = json_body(response).await["error"]["message"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(message.contains("Invalid zip"));
    }
}
