//! Country Use Cases
//!
//! Business logic for mirroring, querying and summarizing country records.

mod delete_country;
mod get_country_by_name;
mod get_status;
mod get_summary_image;
mod list_countries;
mod refresh_countries;
mod render_summary;

pub use delete_country::DeleteCountryUseCase;
pub use get_country_by_name::GetCountryByNameUseCase;
pub use get_status::{GetStatusUseCase, ServiceStatus};
pub use get_summary_image::GetSummaryImageUseCase;
pub use list_countries::ListCountriesUseCase;
pub use refresh_countries::RefreshCountriesUseCase;
pub use render_summary::RenderSummaryUseCase;
