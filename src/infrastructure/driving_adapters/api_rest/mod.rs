//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::countries::{
    DeleteCountryUseCase, GetCountryByNameUseCase, GetStatusUseCase, GetSummaryImageUseCase,
    ListCountriesUseCase, RefreshCountriesUseCase, RenderSummaryUseCase,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub refresh_countries_use_case: Arc<RefreshCountriesUseCase>,
    pub list_countries_use_case: Arc<ListCountriesUseCase>,
    pub get_country_by_name_use_case: Arc<GetCountryByNameUseCase>,
    pub delete_country_use_case: Arc<DeleteCountryUseCase>,
    pub get_status_use_case: Arc<GetStatusUseCase>,
    pub render_summary_use_case: Arc<RenderSummaryUseCase>,
    pub get_summary_image_use_case: Arc<GetSummaryImageUseCase>,
}
