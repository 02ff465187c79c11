//! RestCountries Catalog Client
//!
//! Fetches the raw country list from the RestCountries feed. Every wire
//! field is optional; unknown fields are ignored.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::gateways::CountryCatalogGateway;
use crate::domain::models::catalog::{CountryDescriptor, CurrencyDescriptor};
use crate::shared::errors::GatewayError;

const FEED_NAME: &str = "RestCountries API";

/// Wire representation of one country entry
#[derive(Debug, Deserialize)]
struct RawCountry {
    name: Option<String>,
    capital: Option<String>,
    region: Option<String>,
    population: Option<i64>,
    flag: Option<String>,
    #[serde(default)]
    currencies: Vec<RawCurrency>,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    code: Option<String>,
}

impl From<RawCountry> for CountryDescriptor {
    fn from(raw: RawCountry) -> Self {
        Self {
            name: raw.name,
            capital: raw.capital,
            region: raw.region,
            population: raw.population,
            flag: raw.flag,
            currencies: raw
                .currencies
                .into_iter()
                .map(|currency| CurrencyDescriptor {
                    code: currency.code,
                })
                .collect(),
        }
    }
}

/// HTTP client for the country catalog feed
pub struct RestCountriesClient {
    http: reqwest::Client,
    url: String,
}

impl RestCountriesClient {
    /// Create a new RestCountriesClient
    #[must_use]
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CountryCatalogGateway for RestCountriesClient {
    async fn fetch_countries(&self) -> Result<Vec<CountryDescriptor>, GatewayError> {
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

        let raw: Vec<RawCountry> = response
            .json()
            .await
            .map_err(|error| GatewayError::unavailable(FEED_NAME, error))?;

        Ok(raw.into_iter().map(CountryDescriptor::from).collect())
    }
}
