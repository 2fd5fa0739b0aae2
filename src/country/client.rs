use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::ApiConfig;

use super::cache::ResponseCache;
use super::code::CountryCode;
use super::error::ClientError;
use super::graphql::{GraphqlRequest, GraphqlResponse};
use super::record::CountryRecord;

const MAX_ERROR_BODY: usize = 200;

/// Source of country records.
///
/// The profile screen only sees this trait; the GraphQL endpoint, its
/// timeouts and caching all live behind it.
#[async_trait]
pub trait CountryClient: Send + Sync {
    async fn fetch_country(&self, code: &CountryCode) -> Result<CountryRecord, ClientError>;
}

/// [`CountryClient`] backed by the public countries GraphQL API.
pub struct GraphqlCountryClient {
    client: Client,
    endpoint: String,
    cache: Option<ResponseCache>,
}

impl GraphqlCountryClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
            cache: config.cache_enabled.then(ResponseCache::new),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Number of cached records (0 when caching is disabled).
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map(ResponseCache::len).unwrap_or(0)
    }

    async fn query(&self, code: &CountryCode) -> Result<CountryRecord, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&GraphqlRequest::get_country(code))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                body.chars().take(MAX_ERROR_BODY).collect()
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let decoded: GraphqlResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        decoded.into_record(code)
    }
}

#[async_trait]
impl CountryClient for GraphqlCountryClient {
    async fn fetch_country(&self, code: &CountryCode) -> Result<CountryRecord, ClientError> {
        if let Some(hit) = self.cache.as_ref().and_then(|cache| cache.get(code)) {
            debug!(code = %code, "country cache hit");
            return Ok(hit);
        }

        let record = self.query(code).await?;
        info!(code = %code, name = %record.name, "country fetched");

        if let Some(cache) = &self.cache {
            cache.insert(code.clone(), record.clone());
        }
        Ok(record)
    }
}
