//! Get Status Use Case
//!
//! Reports the store size and the most recent refresh timestamp.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::gateways::CountryRepository;
use crate::shared::errors::UseCaseError;

/// Store-level status readout
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub total_countries: i64,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

/// Use case for the status endpoint
pub struct GetStatusUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl GetStatusUseCase {
    /// Create a new GetStatusUseCase
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<ServiceStatus, UseCaseError> {
        let total_countries = self.country_repository.count().await?;
        let last_refreshed_at = self.country_repository.most_recent_refresh().await?;

        Ok(ServiceStatus {
            total_countries,
            last_refreshed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::UpsertOutcome;
    use crate::domain::models::country::Country;
    use crate::domain::models::query::CountryQuery;
    use crate::domain::models::summary::GdpEntry;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;

    struct MockCountryRepository {
        count: i64,
        last_refresh: Option<DateTime<Utc>>,
    }

    #[async_trait]
    impl CountryRepository for MockCountryRepository {
        async fn upsert(&self, _country: &Country) -> Result<UpsertOutcome, RepositoryError> {
            Ok(UpsertOutcome::Created)
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Country>, RepositoryError> {
            Ok(None)
        }

        async fn delete_by_name(&self, _name: &str) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn list(&self, _query: &CountryQuery) -> Result<Vec<Country>, RepositoryError> {
            Ok(vec![])
        }

        async fn count(&self) -> Result<i64, RepositoryError> {
            Ok(self.count)
        }

        async fn most_recent_refresh(
            &self,
        ) -> Result<Option<DateTime<Utc>>, RepositoryError> {
            Ok(self.last_refresh)
        }

        async fn top_by_gdp(&self, _limit: u32) -> Result<Vec<GdpEntry>, RepositoryError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn should_report_empty_store() {
        let repository = Arc::new(MockCountryRepository {
            count: 0,
            last_refresh: None,
        });
        let use_case = GetStatusUseCase::new(repository);

        let status = use_case.execute().await.unwrap();
        assert_eq!(status.total_countries, 0);
        assert!(status.last_refreshed_at.is_none());
    }

    #[tokio::test]
    async fn should_report_count_and_latest_refresh() {
        let now = Utc::now();
        let repository = Arc::new(MockCountryRepository {
            count: 250,
            last_refresh: Some(now),
        });
        let use_case = GetStatusUseCase::new(repository);

        let status = use_case.execute().await.unwrap();
        assert_eq!(status.total_countries, 250);
        assert_eq!(status.last_refreshed_at, Some(now));
    }
}
