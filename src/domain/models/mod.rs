//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod catalog;
pub mod country;
pub mod query;
pub mod summary;

pub use catalog::{CountryDescriptor, CurrencyDescriptor};
pub use country::{Country, CountryData, RefreshSummary};
pub use query::{CountryQuery, SortKey};
pub use summary::{GdpEntry, SummarySnapshot};
