//! Country DTOs
//!
//! Data transfer objects for country API endpoints. Optional record
//! fields serialize as JSON null when undefined.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::use_cases::countries::ServiceStatus;
use crate::domain::models::country::{Country, RefreshSummary};
use crate::domain::models::query::{CountryQuery, SortKey};

/// Country record response DTO
#[derive(Debug, Clone, Serialize)]
pub struct CountryResponseDto {
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

impl From<Country> for CountryResponseDto {
    fn from(country: Country) -> Self {
        Self {
            name: country.name().to_string(),
            capital: country.capital().map(str::to_string),
            region: country.region().map(str::to_string),
            population: country.population(),
            currency_code: country.currency_code().map(str::to_string),
            exchange_rate: country.exchange_rate(),
            estimated_gdp: country.estimated_gdp(),
            flag_url: country.flag_url().map(str::to_string),
            last_refreshed_at: country.last_refreshed_at(),
        }
    }
}

/// Query parameters for the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCountriesParams {
    pub region: Option<String>,
    pub currency: Option<String>,
    pub sort: Option<String>,
}

impl From<ListCountriesParams> for CountryQuery {
    fn from(params: ListCountriesParams) -> Self {
        Self {
            region: params.region.filter(|value| !value.is_empty()),
            currency: params.currency.filter(|value| !value.is_empty()),
            // unrecognized sort values fall back to natural order
            sort: params.sort.as_deref().and_then(SortKey::parse),
        }
    }
}

/// Response body for the refresh endpoint
#[derive(Debug, Serialize)]
pub struct RefreshResponseDto {
    pub status: &'static str,
    pub message: String,
    pub created: usize,
    pub updated: usize,
}

impl From<RefreshSummary> for RefreshResponseDto {
    fn from(summary: RefreshSummary) -> Self {
        Self {
            status: "success",
            message: format!("Refreshed {} countries", summary.total),
            created: summary.created,
            updated: summary.updated,
        }
    }
}

/// Response body for the status endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponseDto {
    pub total_countries: i64,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl From<ServiceStatus> for StatusResponseDto {
    fn from(status: ServiceStatus) -> Self {
        Self {
            total_countries: status.total_countries,
            last_refreshed_at: status.last_refreshed_at,
        }
    }
}

/// Response body for the delete endpoint
#[derive(Debug, Serialize)]
pub struct DeleteResponseDto {
    pub message: String,
}

impl DeleteResponseDto {
    /// Build the delete confirmation, echoing the name as the client sent it
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("Country {name} deleted successfully"),
        }
    }
}
