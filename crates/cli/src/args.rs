use clap::{Args, ValueEnum};

use crate::defaults;

/// Output format for tabular results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Table,
    /// One row per (curve, time step)
    Csv,
    /// Parameters and curves as a JSON document
    Json,
}

#[derive(Args, Debug)]
pub struct CurvesArgs {
    /// Number of curves to generate
    #[arg(short = 'n', long, default_value_t = defaults::CURVE_COUNT)]
    pub count: usize,

    /// Carrying capacity K
    #[arg(short = 'k', long, default_value_t = defaults::CARRYING_CAPACITY)]
    pub capacity: f64,

    /// Initial population P0
    #[arg(short = 'p', long, default_value_t = defaults::INITIAL_POPULATION)]
    pub initial: f64,

    /// Base of the exponential term
    #[arg(long, default_value_t = defaults::EULER_BASE)]
    pub euler: f64,

    /// Number of discrete time steps per curve
    #[arg(long, default_value_t = defaults::HORIZON)]
    pub horizon: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ThresholdArgs {
    /// Carrying capacity K
    #[arg(short = 'k', long, default_value_t = defaults::CARRYING_CAPACITY)]
    pub capacity: f64,

    /// Starting population
    #[arg(short = 'p', long, default_value_t = defaults::INITIAL_POPULATION)]
    pub initial: f64,

    /// Growth rate r
    #[arg(short, long, default_value_t = defaults::GROWTH_RATE)]
    pub rate: f64,

    /// Integration time step
    #[arg(long, default_value_t = defaults::TIME_STEP)]
    pub dt: f64,

    /// Fraction of K to reach
    #[arg(long, default_value_t = defaults::THRESHOLD_FRACTION)]
    pub fraction: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
