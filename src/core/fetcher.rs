use crate::domain::catalog::Catalog;
use crate::domain::model::{AvailabilityRecord, FeedResponse};
use crate::utils::error::Result;
use reqwest::Client;

/// Public availability feed for Kimsufi dedicated servers. No query
/// parameters, no authentication.
pub const DEFAULT_ENDPOINT: &str =
    "https://ws.ovh.com/dedicated/r2/ws.dispatcher/getAvailability2";

pub struct AvailabilityClient {
    endpoint: String,
    client: Client,
}

impl AvailabilityClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// One GET against the feed, keeping only records whose SKU is in the
    /// (possibly model-restricted) catalog. Transport errors, non-2xx
    /// statuses and malformed bodies are all fatal; there is no retry.
    pub async fn fetch(&self, models: &[String]) -> Result<Vec<AvailabilityRecord>> {
        let catalog = Catalog::filtered_by_models(models);
        if catalog.is_empty() {
            tracing::debug!("requested models match no catalog entry");
        } else {
            tracing::debug!("catalog restricted to {} SKU(s)", catalog.len());
        }

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        // a malformed body is a serialization error, not a transport error
        let body = response.error_for_status()?.text().await?;
        let feed: FeedResponse = serde_json::from_str(&body)?;

        let records: Vec<AvailabilityRecord> = feed
            .answer
            .availability
            .into_iter()
            .filter(|record| catalog.contains_sku(&record.reference))
            .collect();

        tracing::debug!("{} feed record(s) matched the catalog", records.len());
        Ok(records)
    }
}
