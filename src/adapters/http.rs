use crate::domain::model::JsonObject;
use crate::domain::ports::{ConfigProvider, JsonFetcher};
use crate::utils::error::{ConsultaError, Result, TransportError};
use async_trait::async_trait;
use reqwest::Client;

/// `JsonFetcher` over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client honoring the configured timeout and user agent.
    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent().to_string());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConsultaError::Config {
                field: "http".to_string(),
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self::new(client))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<JsonObject> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::Http)?;

        // Both upstream APIs report failures inside JSON bodies, so the status
        // is only logged.
        tracing::debug!("API response status: {}", response.status());

        let bytes = response.bytes().await.map_err(TransportError::Http)?;
        let body: JsonObject = serde_json::from_slice(&bytes).map_err(TransportError::Body)?;
        Ok(body)
    }
}
