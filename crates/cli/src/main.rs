mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{CurvesArgs, ThresholdArgs};
use commands::{curves, distance, threshold, translate};

/// quantbio: deterministic teaching algorithms for quantitative biology
///
/// Translates DNA into protein, generates logistic growth curves, estimates
/// time-to-threshold growth and compares strings by Hamming distance.
#[derive(Parser, Debug)]
#[command(name = "quantbio")]
#[command(author, version, about = "Teaching algorithms for quantitative biology", long_about = None)]
struct Cli {
    /// Number of threads to use for batch operations
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate DNA sequences into protein.
    ///
    /// Each sequence is read in frame from its first base; translation stops
    /// at the first stop codon. Prints one protein per line.
    Translate {
        /// DNA sequences (A, C, G, T)
        #[arg(required = true)]
        sequences: Vec<String>,

        /// Fail on codons that are not in the codon table instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Print one-letter codes (MF) instead of three-letter codes (MetPhe)
        #[arg(long)]
        one_letter: bool,
    },

    /// Generate synthetic logistic growth curves.
    ///
    /// Each curve has a lag phase and growth rate derived from its index, so
    /// the output is identical on every run.
    Curves(CurvesArgs),

    /// Estimate the time for a population to reach a fraction of K.
    ///
    /// Integrates dP/dt = r P (1 - P/K) with forward Euler steps.
    Threshold(ThresholdArgs),

    /// Hamming distance between two equal-length strings.
    Hamming {
        /// First string
        first: String,

        /// Second string
        second: String,
    },

    /// Pairwise Hamming distance matrix for a set of equal-length strings.
    Distances {
        /// Strings to compare
        #[arg(required = true, num_args = 2..)]
        strings: Vec<String>,

        /// Report distances divided by string length
        #[arg(long)]
        normalized: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Translate {
            sequences,
            strict,
            one_letter,
        } => {
            translate::translate_sequences(&sequences, strict, one_letter)?;
        }
        Commands::Curves(args) => {
            curves::generate_curves(&args)?;
        }
        Commands::Threshold(args) => {
            threshold::estimate_threshold(&args)?;
        }
        Commands::Hamming { first, second } => {
            distance::show_hamming(&first, &second)?;
        }
        Commands::Distances {
            strings,
            normalized,
        } => {
            distance::show_distance_matrix(&strings, normalized)?;
        }
    }

    Ok(())
}
