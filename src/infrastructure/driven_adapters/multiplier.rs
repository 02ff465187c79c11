//! Uniform GDP Multiplier
//!
//! Production implementation of the multiplier port: one uniformly
//! random integer per sample from the inclusive range.

use rand::Rng;

use crate::domain::gateways::multiplier::{MultiplierSource, MULTIPLIER_RANGE};

/// Samples uniformly from [`MULTIPLIER_RANGE`]
#[derive(Debug, Default)]
pub struct UniformMultiplier;

impl MultiplierSource for UniformMultiplier {
    fn sample(&self) -> u64 {
        rand::thread_rng().gen_range(MULTIPLIER_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_inside_the_inclusive_range() {
        let source = UniformMultiplier;
        for _ in 0..10_000 {
            let sample = source.sample();
            assert!(MULTIPLIER_RANGE.contains(&sample), "out of range: {sample}");
        }
    }
}
