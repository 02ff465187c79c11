//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod country_catalog;
pub mod country_repository;
pub mod exchange_rates;
pub mod multiplier;
pub mod summary;

pub use country_catalog::CountryCatalogGateway;
pub use country_repository::{CountryRepository, UpsertOutcome};
pub use exchange_rates::{ExchangeRateGateway, RateTable};
pub use multiplier::MultiplierSource;
pub use summary::{SummaryArtifactStore, SummaryRenderer};
