//! Country Currency API - Main Entry Point

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use country_currency_api::application::use_cases::countries::{
    DeleteCountryUseCase, GetCountryByNameUseCase, GetStatusUseCase, GetSummaryImageUseCase,
    ListCountriesUseCase, RefreshCountriesUseCase, RenderSummaryUseCase,
};
use country_currency_api::infrastructure::driven_adapters::config::AppConfig;
use country_currency_api::infrastructure::driven_adapters::database;
use country_currency_api::infrastructure::driven_adapters::{
    ExchangeRateApiClient, FileSummaryArtifact, RasterSummaryRenderer, RestCountriesClient,
    SqliteCountryRepository, UniformMultiplier,
};
use country_currency_api::infrastructure::driving_adapters::api_rest::handlers::countries;
use country_currency_api::infrastructure::driving_adapters::api_rest::middleware::request_id;
use country_currency_api::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "country_currency_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create driven adapters
    let country_repository = Arc::new(SqliteCountryRepository::new(pool));
    let http = reqwest::Client::builder()
        .timeout(config.upstream.timeout())
        .build()?;
    let catalog = Arc::new(RestCountriesClient::new(
        http.clone(),
        config.upstream.countries_url.clone(),
    ));
    let rates = Arc::new(ExchangeRateApiClient::new(
        http,
        config.upstream.rates_url.clone(),
    ));
    let multiplier = Arc::new(UniformMultiplier);
    let renderer = Arc::new(RasterSummaryRenderer);
    let artifact_store = Arc::new(FileSummaryArtifact::new(
        config.summary.artifact_path.clone(),
    ));

    // Create use cases
    let refresh_countries_use_case = Arc::new(RefreshCountriesUseCase::new(
        catalog,
        rates,
        country_repository.clone(),
        multiplier,
    ));
    let list_countries_use_case = Arc::new(ListCountriesUseCase::new(country_repository.clone()));
    let get_country_by_name_use_case =
        Arc::new(GetCountryByNameUseCase::new(country_repository.clone()));
    let delete_country_use_case = Arc::new(DeleteCountryUseCase::new(country_repository.clone()));
    let get_status_use_case = Arc::new(GetStatusUseCase::new(country_repository.clone()));
    let render_summary_use_case = Arc::new(RenderSummaryUseCase::new(
        country_repository,
        renderer,
        artifact_store.clone(),
    ));
    let get_summary_image_use_case = Arc::new(GetSummaryImageUseCase::new(artifact_store));

    // Create application state
    let app_state = AppState {
        refresh_countries_use_case,
        list_countries_use_case,
        get_country_by_name_use_case,
        delete_country_use_case,
        get_status_use_case,
        render_summary_use_case,
        get_summary_image_use_case,
    };

    // Build router
    let app = Router::new()
        .merge(countries::router())
        .layer(middleware::from_fn(request_id::set_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
