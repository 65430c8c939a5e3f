//! # quantbio core
//!
//! Small, deterministic algorithms for teaching quantitative biology:
//!
//! - [`translation`]: DNA-to-protein translation with the standard codon table
//! - [`growth`]: synthetic logistic growth curves and Euler time-to-threshold
//! - [`distance`]: Hamming distances between equal-length strings
//!
//! Every operation is a pure function. The only shared state is the codon
//! table, a `static` that is never mutated.

pub mod base;
pub mod distance;
pub mod errors;
pub mod growth;
pub mod prelude;
pub mod translation;

pub use base::{AminoAcid, CodonTable, STANDARD_CODE};
pub use distance::hamming_distance;
pub use growth::{estimate_threshold_time, generate_growth_curves};
pub use translation::{Protein, translate};
