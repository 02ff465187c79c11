//! List Countries Use Case
//!
//! Retrieves stored countries with optional filtering and sorting.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::Country;
use crate::domain::models::query::CountryQuery;
use crate::shared::errors::UseCaseError;

/// Use case for listing countries
pub struct ListCountriesUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl ListCountriesUseCase {
    /// Create a new ListCountriesUseCase
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, query: CountryQuery) -> Result<Vec<Country>, UseCaseError> {
        tracing::debug!(?query, "Listing countries");

        let countries = self.country_repository.list(&query).await?;

        tracing::debug!(count = countries.len(), "Found countries");
        Ok(countries)
    }
}
