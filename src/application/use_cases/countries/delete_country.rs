//! Delete Country Use Case
//!
//! Removes a country record by name; matching is case-insensitive.
//! Deletion is the only way a record ever leaves the store — refresh
//! never prunes.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a country
pub struct DeleteCountryUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl DeleteCountryUseCase {
    /// Create a new DeleteCountryUseCase
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
    pub async fn execute(&self, name: &str) -> Result<(), UseCaseError> {
        tracing::info!(name, "Deleting country");

        let deleted = self.country_repository.delete_by_name(name).await?;

        if !deleted {
            tracing::warn!(name, "Country not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Country",
            });
        }

        tracing::info!(name, "Country deleted successfully");
        Ok(())
    }
}
