use anyhow::{Context, Result};
use quantbio_core::growth::{GrowthCurve, GrowthParams};
use serde::Serialize;

use crate::args::{CurvesArgs, OutputFormat};
use crate::defaults::TABLE_CURVE_LIMIT;
use crate::printing::print_growth_parameters;

#[derive(Serialize)]
struct CurvesReport<'a> {
    parameters: &'a GrowthParams,
    count: usize,
    curves: &'a [GrowthCurve],
}

pub fn generate_curves(args: &CurvesArgs) -> Result<()> {
    let params = GrowthParams::new(args.capacity, args.initial, args.euler, args.horizon);
    params.validate().context("Invalid growth parameters")?;

    let curves = params.generate(args.count);

    match args.format {
        OutputFormat::Table => print_table(&params, &curves),
        OutputFormat::Csv => print!("{}", to_csv(&curves)),
        OutputFormat::Json => {
            let report = CurvesReport {
                parameters: &params,
                count: curves.len(),
                curves: &curves,
            };
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize curves")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn print_table(params: &GrowthParams, curves: &[GrowthCurve]) {
    println!("📈 quantbio - Logistic Growth Curves");
    println!("============================================");
    print_growth_parameters(params, curves.len());

    println!("\n🧫 Curves");
    println!(
        "  {:>5}  {:>4}  {:>5}  {:>10}  {:>12}",
        "curve", "lag", "rate", "t(K/2)", "final"
    );
    let half = params.carrying_capacity / 2.0;
    for curve in curves.iter().take(TABLE_CURVE_LIMIT) {
        let half_time = curve
            .points()
            .find(|&(_, p)| p >= half)
            .map_or_else(|| "-".to_string(), |(t, _)| t.to_string());
        let last = curve
            .final_population()
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
        println!(
            "  {:>5}  {:>4}  {:>5.2}  {:>10}  {:>12}",
            curve.index, curve.lag, curve.rate, half_time, last
        );
    }
    if curves.len() > TABLE_CURVE_LIMIT {
        println!(
            "  ... {} more curves (use --format csv or --format json for full output)",
            curves.len() - TABLE_CURVE_LIMIT
        );
    }

    println!("\n✓ Generated {} curves", curves.len());
}

fn to_csv(curves: &[GrowthCurve]) -> String {
    let mut content = String::from("curve,time,population\n");
    for curve in curves {
        for (t, p) in curve.points() {
            content.push_str(&format!("{},{t},{p}\n", curve.index));
        }
    }
    content
}
