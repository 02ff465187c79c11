//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for building the application on an
//! in-memory SQLite database, with both upstream feeds served by
//! wiremock and the summary artifact kept in a temp directory.

use std::path::Path;
use std::sync::Arc;

use axum::{middleware, Router};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use country_currency_api::application::use_cases::countries::{
    DeleteCountryUseCase, GetCountryByNameUseCase, GetStatusUseCase, GetSummaryImageUseCase,
    ListCountriesUseCase, RefreshCountriesUseCase, RenderSummaryUseCase,
};
use country_currency_api::infrastructure::driven_adapters::config::AppConfig;
use country_currency_api::infrastructure::driven_adapters::{
    ExchangeRateApiClient, FileSummaryArtifact, RasterSummaryRenderer, RestCountriesClient,
    SqliteCountryRepository, UniformMultiplier,
};
use country_currency_api::infrastructure::driving_adapters::api_rest::handlers::countries;
use country_currency_api::infrastructure::driving_adapters::api_rest::middleware::request_id;
use country_currency_api::infrastructure::driving_adapters::api_rest::AppState;

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub catalog: MockServer,
    pub rates: MockServer,
    _artifact_dir: TempDir,
}

impl TestApp {
    /// Create a new test application with a fresh in-memory database
    pub async fn new() -> Self {
        let catalog = MockServer::start().await;
        let rates = MockServer::start().await;
        let artifact_dir = tempfile::tempdir().expect("Failed to create artifact dir");

        // A single connection keeps the in-memory database alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let config = create_test_config(&catalog.uri(), &rates.uri(), artifact_dir.path());

        // Create driven adapters
        let country_repository = Arc::new(SqliteCountryRepository::new(pool.clone()));
        let http = reqwest::Client::builder()
            .timeout(config.upstream.timeout())
            .build()
            .expect("Failed to build http client");
        let catalog_client = Arc::new(RestCountriesClient::new(
            http.clone(),
            config.upstream.countries_url.clone(),
        ));
        let rates_client = Arc::new(ExchangeRateApiClient::new(
            http,
            config.upstream.rates_url.clone(),
        ));
        let artifact_store = Arc::new(FileSummaryArtifact::new(
            config.summary.artifact_path.clone(),
        ));

        // Create use cases
        let refresh_countries_use_case = Arc::new(RefreshCountriesUseCase::new(
            catalog_client,
            rates_client,
            country_repository.clone(),
            Arc::new(UniformMultiplier),
        ));
        let list_countries_use_case =
            Arc::new(ListCountriesUseCase::new(country_repository.clone()));
        let get_country_by_name_use_case =
            Arc::new(GetCountryByNameUseCase::new(country_repository.clone()));
        let delete_country_use_case =
            Arc::new(DeleteCountryUseCase::new(country_repository.clone()));
        let get_status_use_case = Arc::new(GetStatusUseCase::new(country_repository.clone()));
        let render_summary_use_case = Arc::new(RenderSummaryUseCase::new(
            country_repository,
            Arc::new(RasterSummaryRenderer),
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
        let router = Router::new()
            .merge(countries::router())
            .layer(middleware::from_fn(request_id::set_request_id))
            .with_state(app_state);

        Self {
            router,
            pool,
            catalog,
            rates,
            _artifact_dir: artifact_dir,
        }
    }

    /// Serve the given country list from the catalog feed
    pub async fn mock_catalog(&self, countries: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v2/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(countries))
            .mount(&self.catalog)
            .await;
    }

    /// Make the catalog feed fail with the given status
    pub async fn mock_catalog_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/v2/all"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.catalog)
            .await;
    }

    /// Serve the given rate table from the exchange-rate feed
    pub async fn mock_rates(&self, rates: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"base": "USD", "rates": rates})),
            )
            .mount(&self.rates)
            .await;
    }

    /// Make the exchange-rate feed fail with the given status
    pub async fn mock_rates_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.rates)
            .await;
    }
}

/// Create a test configuration pointing at the mock servers
fn create_test_config(catalog_uri: &str, rates_uri: &str, artifact_dir: &Path) -> AppConfig {
    use config::{Config, File, FileFormat};

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[database]
url = "sqlite::memory:"
max_connections = 1
min_connections = 1

[upstream]
countries_url = "{catalog_uri}/v2/all"
rates_url = "{rates_uri}/v4/latest/USD"
timeout_secs = 5

[summary]
artifact_path = "{artifact_path}"
"#,
        artifact_path = artifact_dir.join("summary.png").display()
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Read a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not JSON")
}
