//! HTTP implementation of the data source.
//!
//! Issues a GET against each configured endpoint and parses the JSON array
//! responses into typed records. The two fetches are sequential; the core
//! does not start until both record sets are materialized, so there is
//! nothing to gain from overlapping them here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompanyRecord, TravelRecord};

use super::{DataSource, parse_records};

/// Fetches record sets over HTTP from the configured endpoints.
pub struct HttpLoader {
    client: Client,
    config: SourceConfig,
}

impl HttpLoader {
    /// Creates a loader with a client honoring the configured timeout.
    pub fn new(config: SourceConfig) -> EngineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| EngineError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    async fn fetch_dataset<T: DeserializeOwned>(
        &self,
        dataset: &str,
        url: &str,
    ) -> EngineResult<Vec<T>> {
        debug!(dataset, url, "fetching record set");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EngineError::FetchFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::FetchFailed {
                url: url.to_string(),
                message: format!("unexpected status {status}"),
            });
        }

        let payload: Value = response.json().await.map_err(|e| EngineError::InvalidPayload {
            dataset: dataset.to_string(),
            message: e.to_string(),
        })?;

        let records = parse_records(dataset, payload)?;
        info!(dataset, count = records.len(), "fetched record set");
        Ok(records)
    }
}

#[async_trait]
impl DataSource for HttpLoader {
    async fn fetch_travels(&self) -> EngineResult<Vec<TravelRecord>> {
        self.fetch_dataset("travel", &self.config.travel_api_url)
            .await
    }

    async fn fetch_companies(&self) -> EngineResult<Vec<CompanyRecord>> {
        self.fetch_dataset("company", &self.config.company_api_url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_builds_from_default_config() {
        assert!(HttpLoader::new(SourceConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_fetch_failed() {
        // reserved TEST-NET address, nothing listens there
        let config = SourceConfig {
            travel_api_url: "http://192.0.2.1/travels".to_string(),
            company_api_url: "http://192.0.2.1/companies".to_string(),
            request_timeout_secs: 1,
        };
        let loader = HttpLoader::new(config).unwrap();

        let result = loader.fetch_travels().await;

        match result.unwrap_err() {
            EngineError::FetchFailed { url, .. } => {
                assert_eq!(url, "http://192.0.2.1/travels");
            }
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
    }
}
