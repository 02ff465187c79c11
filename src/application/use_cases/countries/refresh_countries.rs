//! Refresh Countries Use Case
//!
//! Orchestrates both upstream gateways, computes derived fields and
//! upserts the results into the country store.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::gateways::{
    CountryCatalogGateway, CountryRepository, ExchangeRateGateway, MultiplierSource, RateTable,
    UpsertOutcome,
};
use crate::domain::models::catalog::CountryDescriptor;
use crate::domain::models::country::{Country, CountryData, RefreshSummary};
use crate::shared::errors::UseCaseError;

/// Use case for refreshing the country mirror from the upstream feeds
pub struct RefreshCountriesUseCase {
    catalog: Arc<dyn CountryCatalogGateway>,
    rates: Arc<dyn ExchangeRateGateway>,
    country_repository: Arc<dyn CountryRepository>,
    multiplier: Arc<dyn MultiplierSource>,
}

impl RefreshCountriesUseCase {
    /// Create a new RefreshCountriesUseCase
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CountryCatalogGateway>,
        rates: Arc<dyn ExchangeRateGateway>,
        country_repository: Arc<dyn CountryRepository>,
        multiplier: Arc<dyn MultiplierSource>,
    ) -> Self {
        Self {
            catalog,
            rates,
            country_repository,
            multiplier,
        }
    }

    /// Execute the use case.
    ///
    /// Both feeds must respond before any record is written; either one
    /// failing aborts the whole cycle with zero writes. Per-record
    /// failures after that gate are counted and skipped, never fatal.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Upstream` if either feed is unavailable.
    pub async fn execute(&self) -> Result<RefreshSummary, UseCaseError> {
        tracing::info!("Refreshing country mirror from upstream feeds");

        let rates = self.rates.fetch_rates().await?;
        let descriptors = self.catalog.fetch_countries().await?;
        let refreshed_at = Utc::now();

        let mut summary = RefreshSummary {
            total: descriptors.len(),
            ..RefreshSummary::default()
        };

        for descriptor in descriptors {
            let Some(name) = descriptor
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
            else {
                tracing::warn!("Skipping catalog entry without a name");
                summary.skipped += 1;
                continue;
            };

            let record = self.build_record(name, &descriptor, &rates, refreshed_at);
            match self.country_repository.upsert(&record).await {
                Ok(UpsertOutcome::Created) => summary.created += 1,
                Ok(UpsertOutcome::Updated) => summary.updated += 1,
                Err(error) => {
                    tracing::warn!(name = record.name(), %error, "Skipping country record");
                    summary.skipped += 1;
                }
            }
        }

        tracing::info!(
            total = summary.total,
            created = summary.created,
            updated = summary.updated,
            skipped = summary.skipped,
            "Refresh cycle complete"
        );

        Ok(summary)
    }

    /// Build one store record from a raw descriptor.
    ///
    /// `exchange_rate` is only taken from the table when the code resolves
    /// to a positive finite rate; `estimated_gdp` follows it.
    fn build_record(
        &self,
        name: String,
        descriptor: &CountryDescriptor,
        rates: &RateTable,
        refreshed_at: DateTime<Utc>,
    ) -> Country {
        let currency_code = descriptor.primary_currency_code().map(str::to_string);
        let population = descriptor.population.unwrap_or(0);

        let exchange_rate = currency_code
            .as_deref()
            .and_then(|code| rates.get(code))
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0);

        let estimated_gdp = exchange_rate.map(|rate| {
            let multiplier = self.multiplier.sample();
            (population as f64 * multiplier as f64) / rate
        });

        Country::new(CountryData {
            name,
            capital: descriptor.capital.clone(),
            region: descriptor.region.clone(),
            population,
            currency_code,
            exchange_rate,
            estimated_gdp,
            flag_url: descriptor.flag.clone(),
            last_refreshed_at: refreshed_at,
        })
    }
}
