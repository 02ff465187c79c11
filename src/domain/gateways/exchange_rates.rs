//! Exchange Rate Gateway
//!
//! Port wrapping the external exchange-rate feed, base currency USD.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::shared::errors::GatewayError;

/// Currency code to units-per-USD rate
pub type RateTable = HashMap<String, f64>;

/// Fetches current USD-based exchange rates
#[async_trait]
pub trait ExchangeRateGateway: Send + Sync {
    /// Fetch the current rate table.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` on any transport error, timeout
    /// or non-success response.
    async fn fetch_rates(&self) -> Result<RateTable, GatewayError>;
}
