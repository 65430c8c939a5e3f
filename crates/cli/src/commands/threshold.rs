use anyhow::{Context, Result};
use quantbio_core::growth::{ThresholdParams, ThresholdRun};
use serde::Serialize;

use crate::args::ThresholdArgs;
use crate::printing::print_threshold_parameters;

#[derive(Serialize)]
struct ThresholdReport<'a> {
    parameters: &'a ThresholdParams,
    #[serde(flatten)]
    run: ThresholdRun,
    analytic: f64,
}

pub fn estimate_threshold(args: &ThresholdArgs) -> Result<()> {
    let params = ThresholdParams {
        carrying_capacity: args.capacity,
        initial_population: args.initial,
        rate: args.rate,
        time_step: args.dt,
        fraction: args.fraction,
    };
    // The integration itself is unguarded and would never return on these.
    params.validate().context("Invalid threshold parameters")?;

    let run = params.run();
    let analytic = params.analytic_time();

    if args.json {
        let report = ThresholdReport {
            parameters: &params,
            run,
            analytic,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
        println!("{json}");
        return Ok(());
    }

    println!("⏱️  quantbio - Time to Threshold");
    println!("============================================");
    print_threshold_parameters(&params);

    println!("\n📊 Result");
    println!("  • Elapsed Time (Euler): {:.4}", run.elapsed);
    println!("  • Steps: {}", run.steps);
    println!("  • Final Population: {:.4}", run.population);
    println!("  • Elapsed Time (analytic): {analytic:.4}");
    if run.steps == 0 {
        println!("\n✓ Population already at or above the target");
    }

    Ok(())
}
