//! Synthetic logistic growth curves.
//!
//! Each curve holds its population at `P0` for a lag phase and then follows
//! the closed-form logistic solution shifted to start at the end of the lag.
//! Lag and rate are derived from the curve index with fixed modular formulas,
//! so a batch is fully reproducible without any random seed.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ParameterError;

/// Default number of curves in a batch.
pub const DEFAULT_CURVE_COUNT: usize = 100;

/// Parameters shared by every curve in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParams {
    /// Carrying capacity K (> 0)
    pub carrying_capacity: f64,
    /// Initial population P0 (0 < P0 <= K)
    pub initial_population: f64,
    /// Base of the exponential term (> 1)
    pub euler_base: f64,
    /// Number of discrete time steps per curve
    pub horizon: usize,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            carrying_capacity: 1000.0,
            initial_population: 10.0,
            euler_base: 2.71828,
            horizon: 100,
        }
    }
}

impl GrowthParams {
    /// Create a new parameter set.
    pub fn new(
        carrying_capacity: f64,
        initial_population: f64,
        euler_base: f64,
        horizon: usize,
    ) -> Self {
        Self {
            carrying_capacity,
            initial_population,
            euler_base,
            horizon,
        }
    }

    /// Check that the parameters describe a bounded, increasing curve.
    ///
    /// Generation itself does not call this; it is up to the caller to decide
    /// whether degenerate parameters are acceptable.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let k = finite("carrying_capacity", self.carrying_capacity)?;
        let p0 = finite("initial_population", self.initial_population)?;
        let e = finite("euler_base", self.euler_base)?;

        if k <= 0.0 {
            return Err(ParameterError::NonPositive {
                name: "carrying_capacity",
                value: k,
            });
        }
        if p0 <= 0.0 || p0 > k {
            return Err(ParameterError::OutOfRange {
                name: "initial_population",
                value: p0,
                range: "(0, carrying_capacity]",
            });
        }
        if e <= 1.0 {
            return Err(ParameterError::OutOfRange {
                name: "euler_base",
                value: e,
                range: "(1, inf)",
            });
        }
        Ok(())
    }

    /// Generate `count` curves with these parameters.
    ///
    /// Curves are built in parallel; the result is in index order and does
    /// not depend on the number of threads.
    pub fn generate(&self, count: usize) -> Vec<GrowthCurve> {
        (0..count)
            .into_par_iter()
            .map(|idx| GrowthCurve::build(idx, self))
            .collect()
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NotFinite { name })
    }
}

/// A single growth trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    /// 1-based curve number
    pub index: usize,
    /// Number of time steps held at the initial population
    pub lag: usize,
    /// Growth rate used after the lag phase
    pub rate: f64,
    /// Time steps `0..horizon`
    pub times: Vec<usize>,
    /// Population at each time step
    pub populations: Vec<f64>,
}

impl GrowthCurve {
    /// Build the curve for zero-based index `idx`.
    pub fn build(idx: usize, params: &GrowthParams) -> Self {
        let lag = curve_lag(idx);
        let rate = curve_rate(idx);
        let times: Vec<usize> = (0..params.horizon).collect();
        let populations = times
            .iter()
            .map(|&t| logistic_population(t, lag, rate, params))
            .collect();

        Self {
            index: idx + 1,
            lag,
            rate,
            times,
            populations,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Population at time step `t`, or `None` past the horizon.
    pub fn population_at(&self, t: usize) -> Option<f64> {
        self.populations.get(t).copied()
    }

    pub fn final_population(&self) -> Option<f64> {
        self.populations.last().copied()
    }

    /// Iterate over `(time, population)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.times.iter().copied().zip(self.populations.iter().copied())
    }
}

/// Lag phase length for zero-based curve index `idx`: 5..=20 steps.
#[inline]
pub const fn curve_lag(idx: usize) -> usize {
    (idx % 16) + 5
}

/// Growth rate for zero-based curve index `idx`: 0.14..=0.27.
#[inline]
pub fn curve_rate(idx: usize) -> f64 {
    0.12 + ((idx % 14) + 2) as f64 / 100.0
}

/// Population at time step `t` for a curve with the given lag and rate.
///
/// Before the lag ends the population is exactly `P0`; afterwards it is
/// `K / (1 + ((K - P0) / P0) * E^(-rate * (t - lag)))`.
pub fn logistic_population(t: usize, lag: usize, rate: f64, params: &GrowthParams) -> f64 {
    let k = params.carrying_capacity;
    let p0 = params.initial_population;

    // The closed form equals P0 at t == lag; return it directly so the lag
    // boundary is exact and never dips below P0 through rounding.
    if t <= lag {
        return p0;
    }

    let elapsed = (t - lag) as f64;
    k / (1.0 + ((k - p0) / p0) * params.euler_base.powf(-rate * elapsed))
}

/// Generate `count` logistic growth curves.
///
/// Curve `i` (zero-based) gets `lag = (i % 16) + 5` and
/// `rate = 0.12 + ((i % 14) + 2) / 100`, and is reported with index `i + 1`.
pub fn generate_growth_curves(
    count: usize,
    carrying_capacity: f64,
    initial_population: f64,
    euler_base: f64,
    horizon: usize,
) -> Vec<GrowthCurve> {
    GrowthParams::new(carrying_capacity, initial_population, euler_base, horizon).generate(count)
}
