//! Exchange Rate Feed Client
//!
//! Fetches the current USD-based rate table.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::gateways::{ExchangeRateGateway, RateTable};
use crate::shared::errors::GatewayError;

const FEED_NAME: &str = "Exchange Rates API";

/// Wire envelope around the rate table
#[derive(Debug, Deserialize)]
struct RatesEnvelope {
    rates: RateTable,
}

/// HTTP client for the exchange-rate feed
pub struct ExchangeRateApiClient {
    http: reqwest::Client,
    url: String,
}

impl ExchangeRateApiClient {
    /// Create a new ExchangeRateApiClient
    #[must_use]
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ExchangeRateGateway for ExchangeRateApiClient {
    async fn fetch_rates(&self) -> Result<RateTable, GatewayError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|error| GatewayError::unavailable(FEED_NAME, error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::unavailable(
                FEED_NAME,
                format!("status {status}"),
            ));
        }

        let envelope: RatesEnvelope = response
            .json()
            .await
            .map_err(|error| GatewayError::unavailable(FEED_NAME, error))?;

        Ok(envelope.rates)
    }
}
