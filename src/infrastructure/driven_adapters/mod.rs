//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - SQLite repository
//! - Upstream feed clients
//! - Multiplier sampling, summary rendering and artifact storage
//! - Configuration

pub mod config;
pub mod country_repository;
pub mod database;
pub mod exchange_rate_api;
pub mod multiplier;
pub mod rest_countries;
pub mod summary_artifact;
pub mod summary_renderer;

pub use config::AppConfig;
pub use country_repository::SqliteCountryRepository;
pub use exchange_rate_api::ExchangeRateApiClient;
pub use multiplier::UniformMultiplier;
pub use rest_countries::RestCountriesClient;
pub use summary_artifact::FileSummaryArtifact;
pub use summary_renderer::RasterSummaryRenderer;
