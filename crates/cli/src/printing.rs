use quantbio_core::growth::{GrowthParams, ThresholdParams};

pub fn print_growth_parameters(params: &GrowthParams, count: usize) {
    println!("\n📋 Growth Model");
    println!("  • Curves: {count} [-n, --count]");
    println!(
        "  • Carrying Capacity (K): {} [-k, --capacity]",
        params.carrying_capacity
    );
    println!(
        "  • Initial Population (P0): {} [-p, --initial]",
        params.initial_population
    );
    println!("  • Exponential Base (E): {} [--euler]", params.euler_base);
    println!("  • Horizon: {} time steps [--horizon]", params.horizon);
    println!("  • Lag: (i mod 16) + 5, Rate: 0.12 + ((i mod 14) + 2) / 100");
}

pub fn print_threshold_parameters(params: &ThresholdParams) {
    println!("\n📋 Logistic ODE");
    println!(
        "  • Carrying Capacity (K): {} [-k, --capacity]",
        params.carrying_capacity
    );
    println!(
        "  • Starting Population: {} [-p, --initial]",
        params.initial_population
    );
    println!("  • Growth Rate (r): {} [-r, --rate]", params.rate);
    println!("  • Time Step (dt): {} [--dt]", params.time_step);
    println!(
        "  • Target: {:.0}% of K = {} [--fraction]",
        params.fraction * 100.0,
        params.fraction * params.carrying_capacity
    );
}
