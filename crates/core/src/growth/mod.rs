//! Logistic population growth.
//!
//! - [`curves`]: batches of discrete-time growth curves with a lag phase
//! - [`threshold`]: Euler estimate of the time to reach a fraction of K

pub mod curves;
pub mod threshold;

pub use curves::{
    DEFAULT_CURVE_COUNT, GrowthCurve, GrowthParams, curve_lag, curve_rate,
    generate_growth_curves, logistic_population,
};
pub use threshold::{
    DEFAULT_THRESHOLD_FRACTION, DEFAULT_TIME_STEP, MAX_THRESHOLD_STEPS, ThresholdParams,
    ThresholdRun, analytic_threshold_time, estimate_threshold_time, logistic_derivative,
    simulate_to_fraction,
};
