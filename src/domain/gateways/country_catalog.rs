//! Country Catalog Gateway
//!
//! Port wrapping the external catalog of countries.

use async_trait::async_trait;

use crate::domain::models::catalog::CountryDescriptor;
use crate::shared::errors::GatewayError;

/// Fetches the raw list of countries from the upstream catalog feed
#[async_trait]
pub trait CountryCatalogGateway: Send + Sync {
    /// Fetch all country descriptors.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unavailable` on any transport error, timeout
    /// or non-success response.
    async fn fetch_countries(&self) -> Result<Vec<CountryDescriptor>, GatewayError>;
}
