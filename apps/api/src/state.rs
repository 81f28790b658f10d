use std::sync::Arc;

use crate::config::Config;
use crate::export::netlify::SiteDeployer;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Static host client. Default: NetlifyClient; tests swap in a fake.
    pub deployer: Arc<dyn SiteDeployer>,
    pub config: Config,
}
