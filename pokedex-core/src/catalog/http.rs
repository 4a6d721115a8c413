//! Tyradex HTTP catalog source
//!
//! Implements the CatalogSource trait against the public Tyradex REST API.
//! Plain GET requests returning JSON; no authentication.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::{CatalogSource, Creature};
use crate::config::PokedexConfig;

/// Default request timeout (10 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Tyradex API source
pub struct HttpCatalogSource {
    base_url: String,
    #[cfg(feature = "remote")]
    client: reqwest::Client,
}

impl HttpCatalogSource {
    /// Create a source for `base_url` (e.g. `https://tyradex.app/api/v1`)
    #[cfg(feature = "remote")]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        use anyhow::Context;

        let client = reqwest::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Stub for when the remote feature is disabled
    #[cfg(not(feature = "remote"))]
    pub fn new(base_url: &str, _timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &PokedexConfig) -> Result<Self> {
        Self::new(&config.api_base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self) -> String {
        format!("{}/pokemon", self.base_url)
    }

    fn detail_url(&self, id: u32, region: Option<&str>) -> Result<String> {
        match region {
            Some(region) => {
                if region.is_empty()
                    || !region
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                {
                    anyhow::bail!("Invalid region name: '{}'", region);
                }
                Ok(format!("{}/pokemon/{}/{}", self.base_url, id, region))
            }
            None => Ok(format!("{}/pokemon/{}", self.base_url, id)),
        }
    }

    #[cfg(feature = "remote")]
    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        use anyhow::Context;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Catalog request failed: HTTP {} from {}", status, url);
        }

        tracing::debug!("{} {}", status, url);

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {url}"))
    }

    /// Stub for when the remote feature is disabled
    #[cfg(not(feature = "remote"))]
    async fn get_json(&self, _url: &str) -> Result<serde_json::Value> {
        anyhow::bail!("Remote catalog is not enabled. Rebuild with --features remote")
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<Creature>> {
        let url = self.list_url();

        match self.get_json(&url).await? {
            serde_json::Value::Array(items) => {
                let creatures = Creature::collect_lenient(items);
                tracing::debug!("Fetched {} records from {}", creatures.len(), url);
                Ok(creatures)
            }
            _ => anyhow::bail!("Unexpected catalog response from {}: expected a JSON array", url),
        }
    }

    async fn fetch_by_id(&self, id: u32, region: Option<&str>) -> Result<Creature> {
        let url = self.detail_url(id, region)?;
        let value = self.get_json(&url).await?;

        Creature::from_value(value)
            .ok_or_else(|| anyhow::anyhow!("Malformed record for #{} from {}", id, url))
    }

    fn name(&self) -> &'static str {
        "tyradex"
    }
}
