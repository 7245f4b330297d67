use crate::core::errors::SplitroomError;
use crate::core::models::rates::RateTable;
use crate::infrastructure::rates::RateSource;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct FixerBody {
    pub success: bool,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl FixerBody {
    /// Validates a provider answer; `fallback_pivot` is used when the body
    /// omits its base currency.
    pub fn into_table(self, fallback_pivot: &str) -> Result<RateTable, SplitroomError> {
        if !self.success {
            return Err(SplitroomError::RateFetch(
                "Rate provider reported failure".to_string(),
            ));
        }
        let pivot = self.base.unwrap_or_else(|| fallback_pivot.to_string());
        Ok(RateTable::new(&pivot, self.rates))
    }
}

/// Fetches the latest rates from a Fixer-compatible endpoint.
pub struct FixerRateSource {
    client: Client,
    url: String,
    access_key: String,
    pivot: String,
}

impl FixerRateSource {
    pub fn new(url: &str, access_key: &str, pivot: &str) -> Result<Self, SplitroomError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SplitroomError::InternalServerError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(FixerRateSource {
            client,
            url: url.to_string(),
            access_key: access_key.to_string(),
            pivot: pivot.to_string(),
        })
    }
}

#[async_trait]
impl RateSource for FixerRateSource {
    async fn fetch_rates(&self) -> Result<RateTable, SplitroomError> {
        info!("Requesting exchange rates from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .query(&[("access_key", self.access_key.as_str()), ("format", "1")])
            .send()
            .await
            .map_err(|e| {
                warn!("Rate request failed: {}", e);
                SplitroomError::RateFetch(e.to_string())
            })?;

        let body: FixerBody = response
            .error_for_status()
            .map_err(|e| SplitroomError::RateFetch(e.to_string()))?
            .json()
            .await
            .map_err(|e| SplitroomError::RateFetch(format!("Malformed rate response: {}", e)))?;

        let table = body.into_table(&self.pivot)?;
        debug!("Received {} rates based on {}", table.rates.len(), table.pivot);
        Ok(table)
    }
}
