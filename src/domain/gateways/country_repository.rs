//! Country Repository Gateway
//!
//! Abstract trait defining the contract for country persistence operations.
//! Name matching is case-insensitive throughout; the stored record keeps
//! the casing supplied by the source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::models::country::Country;
use crate::domain::models::query::CountryQuery;
use crate::domain::models::summary::GdpEntry;
use crate::shared::errors::RepositoryError;

/// Whether an upsert inserted a new record or overwrote an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Repository trait for Country persistence operations
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Insert or fully overwrite a record keyed by name, atomically
    async fn upsert(&self, country: &Country) -> Result<UpsertOutcome, RepositoryError>;

    /// Find a country by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, RepositoryError>;

    /// Delete a country by name; `false` when no record matched
    async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError>;

    /// List countries matching the given filters, in the requested order
    async fn list(&self, query: &CountryQuery) -> Result<Vec<Country>, RepositoryError>;

    /// Total number of stored records
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Most recent `last_refreshed_at` across all records
    async fn most_recent_refresh(&self) -> Result<Option<DateTime<Utc>>, RepositoryError>;

    /// Top records by estimated GDP descending, excluding undefined GDP
    async fn top_by_gdp(&self, limit: u32) -> Result<Vec<GdpEntry>, RepositoryError>;
}
