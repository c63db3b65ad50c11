use async_trait::async_trait;
use serde_json::Value;
use sitenav_api::{FetchError, SiteClient};

use crate::config::SiteConfig;

/// Supplies raw content payloads to the menu store and portfolio grid.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the service category list.
    async fn fetch_services(&self) -> Result<Value, FetchError>;

    /// Fetch the portfolio project list.
    async fn fetch_portfolio(&self) -> Result<Value, FetchError>;

    /// Origin that relative image paths are joined onto.
    fn asset_origin(&self) -> &str;
}

/// [`ContentSource`] backed by the site's REST API.
pub struct HttpContentSource {
    client: SiteClient,
    services_path: String,
    portfolio_path: String,
}

impl HttpContentSource {
    pub fn new(client: SiteClient, services_path: impl Into<String>, portfolio_path: impl Into<String>) -> Self {
        Self {
            client,
            services_path: services_path.into(),
            portfolio_path: portfolio_path.into(),
        }
    }

    /// Build a client and source from configuration.
    pub fn from_config(config: &SiteConfig) -> anyhow::Result<Self> {
        let client = SiteClient::new(&config.api_base, config.timeout())?;
        Ok(Self::new(client, &config.services_path, &config.portfolio_path))
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_services(&self) -> Result<Value, FetchError> {
        self.client.get_json(&self.services_path).await
    }

    async fn fetch_portfolio(&self) -> Result<Value, FetchError> {
        self.client.get_json(&self.portfolio_path).await
    }

    fn asset_origin(&self) -> &str {
        self.client.base_url()
    }
}
