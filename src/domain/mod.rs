//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::country_repository::{CountryRepository, UpsertOutcome};
pub use models::country::{Country, CountryData, RefreshSummary};
pub use models::query::{CountryQuery, SortKey};
