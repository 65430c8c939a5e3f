//! Time for a logistic population to reach a fraction of its carrying
//! capacity, by forward Euler integration of `dP/dt = r * P * (1 - P / K)`.
//!
//! The integrator is first order: accuracy depends on `dt`, and a large
//! `r * dt` may overshoot the threshold in a single step (the loop still
//! terminates because the check is `P >= target`). Inputs are not guarded:
//! with `r <= 0` or `K <= 0` the population never reaches the target and the
//! loop does not return. Use [`ThresholdParams::validate`] first when the
//! values come from outside.
//!
//! # Examples
//!
//! ```
//! use quantbio_core::growth::{analytic_threshold_time, estimate_threshold_time};
//!
//! let euler = estimate_threshold_time(1000.0, 10.0, 0.15, 0.01);
//! let exact = analytic_threshold_time(1000.0, 10.0, 0.15, 0.8);
//! assert!((euler - exact).abs() < 0.05);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ParameterError;

/// Default integration step.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Fraction of the carrying capacity that counts as "grown".
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.8;

/// Upper bound on Euler steps accepted by [`ThresholdParams::validate`].
pub const MAX_THRESHOLD_STEPS: u64 = 100_000_000;

/// Outcome of integrating until the threshold was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRun {
    /// Accumulated simulated time
    pub elapsed: f64,
    /// Number of Euler steps taken
    pub steps: usize,
    /// Population after the last step
    pub population: f64,
}

/// Inputs to the threshold estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdParams {
    pub carrying_capacity: f64,
    pub initial_population: f64,
    pub rate: f64,
    pub time_step: f64,
    pub fraction: f64,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            carrying_capacity: 1000.0,
            initial_population: 10.0,
            rate: 0.15,
            time_step: DEFAULT_TIME_STEP,
            fraction: DEFAULT_THRESHOLD_FRACTION,
        }
    }
}

impl ThresholdParams {
    /// Reject inputs for which the integration would not terminate or would
    /// divide by zero.
    ///
    /// Besides range checks, the step size must move the population at both
    /// ends of the climb (an increment below half an ULP is lost to rounding),
    /// and the estimated step count must stay within [`MAX_THRESHOLD_STEPS`].
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("carrying_capacity", self.carrying_capacity),
            ("initial_population", self.initial_population),
            ("rate", self.rate),
            ("time_step", self.time_step),
            ("fraction", self.fraction),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name });
            }
            if value <= 0.0 {
                return Err(ParameterError::NonPositive { name, value });
            }
        }
        if self.fraction >= 1.0 {
            return Err(ParameterError::OutOfRange {
                name: "fraction",
                value: self.fraction,
                range: "(0, 1)",
            });
        }
        if self.initial_population > self.carrying_capacity {
            return Err(ParameterError::OutOfRange {
                name: "initial_population",
                value: self.initial_population,
                range: "(0, carrying_capacity]",
            });
        }

        let target = self.fraction * self.carrying_capacity;
        if self.initial_population >= target {
            return Ok(());
        }

        let stalls = |p: f64| {
            p + logistic_derivative(p, self.rate, self.carrying_capacity) * self.time_step <= p
        };
        if stalls(self.initial_population) || stalls(target) {
            return Err(ParameterError::Unreachable {
                estimated_steps: f64::INFINITY,
                limit: MAX_THRESHOLD_STEPS,
            });
        }

        let estimated_steps = self.analytic_time() / self.time_step;
        if estimated_steps > MAX_THRESHOLD_STEPS as f64 {
            return Err(ParameterError::Unreachable {
                estimated_steps,
                limit: MAX_THRESHOLD_STEPS,
            });
        }
        Ok(())
    }

    pub fn run(&self) -> ThresholdRun {
        simulate_to_fraction(
            self.carrying_capacity,
            self.initial_population,
            self.rate,
            self.time_step,
            self.fraction,
        )
    }

    /// Closed-form crossing time for the same parameters.
    pub fn analytic_time(&self) -> f64 {
        analytic_threshold_time(
            self.carrying_capacity,
            self.initial_population,
            self.rate,
            self.fraction,
        )
    }
}

/// Right-hand side of the logistic ODE.
#[inline]
pub fn logistic_derivative(population: f64, rate: f64, carrying_capacity: f64) -> f64 {
    rate * population * (1.0 - population / carrying_capacity)
}

/// Euler-integrate until the population reaches `fraction * K`.
///
/// Returns immediately with zero elapsed time if the starting population is
/// already at or above the target.
pub fn simulate_to_fraction(
    carrying_capacity: f64,
    initial_population: f64,
    rate: f64,
    dt: f64,
    fraction: f64,
) -> ThresholdRun {
    let target = fraction * carrying_capacity;
    let mut population = initial_population;
    let mut elapsed = 0.0;
    let mut steps = 0;

    while population < target {
        population += logistic_derivative(population, rate, carrying_capacity) * dt;
        elapsed += dt;
        steps += 1;
    }

    ThresholdRun {
        elapsed,
        steps,
        population,
    }
}

/// Time for the population to first reach 80% of the carrying capacity.
pub fn estimate_threshold_time(
    carrying_capacity: f64,
    initial_population: f64,
    rate: f64,
    dt: f64,
) -> f64 {
    simulate_to_fraction(
        carrying_capacity,
        initial_population,
        rate,
        dt,
        DEFAULT_THRESHOLD_FRACTION,
    )
    .elapsed
}

/// Exact crossing time of the continuous logistic solution:
/// `ln(f / (1 - f) * (K - P0) / P0) / r`, or 0 if `P0 >= f * K`.
pub fn analytic_threshold_time(
    carrying_capacity: f64,
    initial_population: f64,
    rate: f64,
    fraction: f64,
) -> f64 {
    if initial_population >= fraction * carrying_capacity {
        return 0.0;
    }
    let odds = (carrying_capacity - initial_population) / initial_population;
    (fraction / (1.0 - fraction) * odds).ln() / rate
}
