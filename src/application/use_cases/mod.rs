//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod countries;

pub use countries::{
    DeleteCountryUseCase, GetCountryByNameUseCase, GetStatusUseCase, GetSummaryImageUseCase,
    ListCountriesUseCase, RefreshCountriesUseCase, RenderSummaryUseCase,
};
