//! Netlify deploy client.
//!
//! Two single-shot calls: create a site, then upload the portfolio ZIP as its
//! first deploy. The caller's personal access token is used as-is and never
//! stored.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_API_URL: &str = "https://api.netlify.com/api/v1";

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to create Netlify site (status {status}): {message}")]
    CreateSite { status: u16, message: String },

    #[error("Failed to deploy to Netlify (status {status}): {message}")]
    Upload { status: u16, message: String },

    #[error("Netlify did not return a site URL")]
    MissingUrl,
}

/// Where a deployed portfolio ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub url: String,
    pub site_id: String,
}

/// Publishes a portfolio archive to a static host.
///
/// Carried in `AppState` as `Arc<dyn SiteDeployer>`.
#[async_trait]
pub trait SiteDeployer: Send + Sync {
    async fn deploy(
        &self,
        token: &str,
        site_name: Option<&str>,
        archive: Vec<u8>,
    ) -> Result<Deployment, DeployError>;
}

#[derive(Debug, Default, Serialize)]
struct CreateSiteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SiteResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    ssl_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeployResponse {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    ssl_url: Option<String>,
}

#[derive(Clone)]
pub struct NetlifyClient {
    client: Client,
    base_url: String,
}

impl NetlifyClient {
    pub fn new(base_url: String) -> Result<Self, DeployError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn create_site(
        &self,
        token: &str,
        site_name: Option<&str>,
    ) -> Result<SiteResponse, DeployError> {
        let body = CreateSiteRequest {
            name: site_name.and_then(sanitize_site_name),
        };

        let response = self
            .client
            .post(format!("{}/sites", self.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeployError::CreateSite {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }

    async fn upload(
        &self,
        token: &str,
        site_id: &str,
        archive: Vec<u8>,
    ) -> Result<DeployResponse, DeployError> {
        let response = self
            .client
            .post(format!("{}/sites/{site_id}/deploys", self.base_url))
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/zip")
            .body(archive)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeployError::Upload {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SiteDeployer for NetlifyClient {
    async fn deploy(
        &self,
        token: &str,
        site_name: Option<&str>,
        archive: Vec<u8>,
    ) -> Result<Deployment, DeployError> {
        let site = self.create_site(token, site_name).await?;
        info!(site_id = %site.id, "Netlify site created");

        let deploy = self.upload(token, &site.id, archive).await?;
        let url = pick_url(&deploy, &site).ok_or(DeployError::MissingUrl)?;
        info!(site_id = %site.id, %url, "Netlify deploy uploaded");

        Ok(Deployment {
            url,
            site_id: site.id,
        })
    }
}

/// Lowercases and replaces every char outside `[a-z0-9-]` with `-`.
/// An empty name means "let Netlify choose".
pub fn sanitize_site_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    Some(
        name.to_lowercase()
            .chars()
            .map(|c| match c {
                'a'..='z' | '0'..='9' | '-' => c,
                _ => '-',
            })
            .collect(),
    )
}

/// Deploy URLs win over site URLs, HTTPS over HTTP. Empty strings are skipped.
fn pick_url(deploy: &DeployResponse, site: &SiteResponse) -> Option<String> {
    [&deploy.ssl_url, &deploy.url, &site.ssl_url, &site.url]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(url: Option<&str>, ssl_url: Option<&str>) -> SiteResponse {
        SiteResponse {
            id: "site-1".into(),
            url: url.map(Into::into),
            ssl_url: ssl_url.map(Into::into),
        }
    }

    fn deploy(url: Option<&str>, ssl_url: Option<&str>) -> DeployResponse {
        DeployResponse {
            url: url.map(Into::into),
            ssl_url: ssl_url.map(Into::into),
        }
    }

    #[test]
    fn test_sanitize_site_name() {
        assert_eq!(
            sanitize_site_name("Jane Doe's Portfolio!").as_deref(),
            Some("jane-doe-s-portfolio-")
        );
        assert_eq!(sanitize_site_name("ok-name-42").as_deref(), Some("ok-name-42"));
        assert_eq!(sanitize_site_name(""), None);
    }

    #[test]
    fn test_create_site_body_omits_missing_name() {
        let body = serde_json::to_string(&CreateSiteRequest::default()).unwrap();
        assert_eq!(body, "{}");
        let body = serde_json::to_string(&CreateSiteRequest {
            name: sanitize_site_name("My Site"),
        })
        .unwrap();
        assert_eq!(body, r#"{"name":"my-site"}"#);
    }

    #[test]
    fn test_url_preference_order() {
        let s = site(Some("http://s.netlify.app"), Some("https://s.netlify.app"));
        assert_eq!(
            pick_url(&deploy(Some("http://d"), Some("https://d")), &s).as_deref(),
            Some("https://d")
        );
        assert_eq!(
            pick_url(&deploy(Some("http://d"), None), &s).as_deref(),
            Some("http://d")
        );
        assert_eq!(
            pick_url(&deploy(None, Some("")), &s).as_deref(),
            Some("https://s.netlify.app")
        );
        assert_eq!(
            pick_url(&deploy(None, None), &site(Some("http://s"), None)).as_deref(),
            Some("http://s")
        );
        assert_eq!(pick_url(&deploy(None, None), &site(None, None)), None);
    }

    #[test]
    fn test_site_response_tolerates_missing_urls() {
        let site: SiteResponse =
            serde_json::from_str(r#"{"id":"abc","name":"x","admin_url":"y"}"#).unwrap();
        assert_eq!(site.id, "abc");
        assert!(site.url.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = NetlifyClient::new("https://api.netlify.com/api/v1/".into()).unwrap();
        assert_eq!(client.base_url, "https://api.netlify.com/api/v1");
    }
}
