//! Shared default values for command-line options.
//! Growth defaults mirror `GrowthParams::default()` and `ThresholdParams::default()`.

// Growth curves
pub const CURVE_COUNT: usize = 100;
pub const CARRYING_CAPACITY: f64 = 1000.0;
pub const INITIAL_POPULATION: f64 = 10.0;
pub const EULER_BASE: f64 = 2.71828;
pub const HORIZON: usize = 100;

// Threshold estimation
pub const GROWTH_RATE: f64 = 0.15;
pub const TIME_STEP: f64 = 0.01;
pub const THRESHOLD_FRACTION: f64 = 0.8;

/// Curves above this count are summarized instead of printed in full
/// in table mode.
pub const TABLE_CURVE_LIMIT: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;
    use quantbio_core::growth::{
        DEFAULT_CURVE_COUNT, DEFAULT_THRESHOLD_FRACTION, DEFAULT_TIME_STEP, GrowthParams,
        ThresholdParams,
    };

    #[test]
    fn test_defaults_match_library() {
        let growth = GrowthParams::default();
        assert_eq!(CURVE_COUNT, DEFAULT_CURVE_COUNT);
        assert_eq!(CARRYING_CAPACITY, growth.carrying_capacity);
        assert_eq!(INITIAL_POPULATION, growth.initial_population);
        assert_eq!(EULER_BASE, growth.euler_base);
        assert_eq!(HORIZON, growth.horizon);

        let threshold = ThresholdParams::default();
        assert_eq!(GROWTH_RATE, threshold.rate);
        assert_eq!(TIME_STEP, DEFAULT_TIME_STEP);
        assert_eq!(THRESHOLD_FRACTION, DEFAULT_THRESHOLD_FRACTION);
    }
}
