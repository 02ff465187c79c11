//! Get Country By Name Use Case
//!
//! Looks up a single country record; name matching is case-insensitive.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::Country;
use crate::shared::errors::UseCaseError;

/// Use case for getting a country by name
pub struct GetCountryByNameUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl GetCountryByNameUseCase {
    /// Create a new GetCountryByNameUseCase
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no record matches the name.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, name: &str) -> Result<Country, UseCaseError> {
        tracing::debug!(name, "Getting country by name");

        self.country_repository
            .find_by_name(name)
            .await?
            .ok_or(UseCaseError::NotFound {
                resource: "Country",
            })
    }
}
