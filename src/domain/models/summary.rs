//! Summary Snapshot
//!
//! The data rendered onto the periodic summary image.

use chrono::{DateTime, Utc};

/// Store contents condensed for the summary image
#[derive(Debug, Clone, Default)]
pub struct SummarySnapshot {
    pub total_countries: i64,
    /// Top records by estimated GDP, descending, GDP always defined
    pub top_by_gdp: Vec<GdpEntry>,
    /// Most recent refresh across all records; `None` when the store is empty
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

/// One line of the top-GDP ranking
#[derive(Debug, Clone)]
pub struct GdpEntry {
    pub name: String,
    pub estimated_gdp: f64,
}
