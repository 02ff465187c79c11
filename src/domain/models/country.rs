//! Country Domain Model
//!
//! Represents one mirrored country record. The name is the natural key;
//! `estimated_gdp` is a derived field that only exists together with
//! `exchange_rate`.

use chrono::{DateTime, Utc};

/// Data required to build a Country record
#[derive(Debug, Clone)]
pub struct CountryData {
    pub name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub population: i64,
    pub currency_code: Option<String>,
    pub exchange_rate: Option<f64>,
    pub estimated_gdp: Option<f64>,
    pub flag_url: Option<String>,
    pub last_refreshed_at: DateTime<Utc>,
}

/// Country domain entity
#[derive(Debug, Clone)]
pub struct Country {
    name: String,
    capital: Option<String>,
    region: Option<String>,
    population: i64,
    currency_code: Option<String>,
    exchange_rate: Option<f64>,
    estimated_gdp: Option<f64>,
    flag_url: Option<String>,
    last_refreshed_at: DateTime<Utc>,
}

impl Country {
    /// Create a Country from field data.
    ///
    /// Upholds the derivation invariant: `estimated_gdp` is dropped when
    /// `exchange_rate` is absent.
    #[must_use]
    pub fn new(data: CountryData) -> Self {
        let estimated_gdp = data.exchange_rate.and(data.estimated_gdp);
        Self {
            name: data.name,
            capital: data.capital,
            region: data.region,
            population: data.population,
            currency_code: data.currency_code,
            exchange_rate: data.exchange_rate,
            estimated_gdp,
            flag_url: data.flag_url,
            last_refreshed_at: data.last_refreshed_at,
        }
    }

    // Getters

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn population(&self) -> i64 {
        self.population
    }

    #[must_use]
    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    #[must_use]
    pub fn exchange_rate(&self) -> Option<f64> {
        self.exchange_rate
    }

    #[must_use]
    pub fn estimated_gdp(&self) -> Option<f64> {
        self.estimated_gdp
    }

    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        self.flag_url.as_deref()
    }

    #[must_use]
    pub fn last_refreshed_at(&self) -> DateTime<Utc> {
        self.last_refreshed_at
    }
}

/// Aggregate result of one refresh cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Descriptors received from the catalog feed
    pub total: usize,
    /// Records inserted for the first time
    pub created: usize,
    /// Records overwritten in place
    pub updated: usize,
    /// Descriptors dropped by per-record errors
    pub skipped: usize,
}
