//! Country Handlers
//!
//! HTTP handlers for the country mirror endpoints.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::country::{
    CountryResponseDto, DeleteResponseDto, ListCountriesParams, RefreshResponseDto,
    StatusResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for all service endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/refresh", post(refresh_countries))
        .route("/countries/image", get(get_summary_image))
        .route(
            "/countries/{name}",
            get(get_country_by_name).delete(delete_country),
        )
        .route("/status", get(get_status))
}

/// GET /countries - List countries with optional filters and sorting
///
/// # Responses
///
/// * 200 OK - JSON array of country records
#[axum::debug_handler]
async fn list_countries(
    State(state): State<AppState>,
    Query(params): Query<ListCountriesParams>,
) -> Result<Json<Vec<CountryResponseDto>>, ApiError> {
    let countries = state.list_countries_use_case.execute(params.into()).await?;

    let response: Vec<CountryResponseDto> =
        countries.into_iter().map(CountryResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /countries/{name} - Get one country by name (case-insensitive)
///
/// # Responses
///
/// * 200 OK - Country record
/// * 404 Not Found - No record matches the name
#[axum::debug_handler]
async fn get_country_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CountryResponseDto>, ApiError> {
    let country = state.get_country_by_name_use_case.execute(&name).await?;

    Ok(Json(CountryResponseDto::from(country)))
}

/// DELETE /countries/{name} - Delete a country by name (case-insensitive)
///
/// # Responses
///
/// * 200 OK - Deletion confirmation
/// * 404 Not Found - No record matches the name
#[axum::debug_handler]
async fn delete_country(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    state.delete_country_use_case.execute(&name).await?;

    Ok(Json(DeleteResponseDto::for_name(&name)))
}

/// POST /countries/refresh - Refresh the mirror from the upstream feeds
///
/// The summary image is regenerated after a successful refresh;
/// a render failure is logged and does not affect the response.
///
/// # Responses
///
/// * 200 OK - Refresh summary
/// * 503 Service Unavailable - Either upstream feed failed
#[axum::debug_handler]
async fn refresh_countries(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponseDto>, ApiError> {
    let summary = state.refresh_countries_use_case.execute().await?;

    if let Err(error) = state.render_summary_use_case.execute().await {
        tracing::warn!(%error, "Summary render failed after refresh");
    }

    Ok(Json(RefreshResponseDto::from(summary)))
}

/// GET /status - Store size and most recent refresh timestamp
///
/// # Responses
///
/// * 200 OK - Status body, `last_refreshed_at` null when the store is empty
#[axum::debug_handler]
async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponseDto>, ApiError> {
    let status = state.get_status_use_case.execute().await?;

    Ok(Json(StatusResponseDto::from(status)))
}

/// GET /countries/image - Serve the latest summary image
///
/// # Responses
///
/// * 200 OK - PNG bytes
/// * 404 Not Found - No artifact has been rendered yet
#[axum::debug_handler]
async fn get_summary_image(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = state.get_summary_image_use_case.execute().await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}
