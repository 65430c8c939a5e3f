//! Base types for sequence representation.
//!
//! This module provides RNA bases, codons, amino acids and the standard
//! codon table used by translation.

mod amino_acid;
mod codon;
mod rna;

pub use amino_acid::AminoAcid;
pub use codon::{Codon, CodonMeaning, CodonTable, STANDARD_CODE};
pub use rna::{RnaBase, transcribe};
