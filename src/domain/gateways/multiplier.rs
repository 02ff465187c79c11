//! GDP Multiplier Source
//!
//! The estimated GDP is a synthetic figure scaled by a random multiplier.
//! Isolating the sampling behind a port keeps the refresh pipeline
//! deterministic under test.

/// Inclusive sampling range for the GDP multiplier
pub const MULTIPLIER_RANGE: std::ops::RangeInclusive<u64> = 1000..=2000;

/// Supplies the per-record GDP multiplier
pub trait MultiplierSource: Send + Sync {
    /// Draw one multiplier from [`MULTIPLIER_RANGE`]
    fn sample(&self) -> u64;
}
