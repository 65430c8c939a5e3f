//! DNA-to-protein translation.
//!
//! A DNA sequence is transcribed (`T` -> `U`), split into consecutive codons
//! from offset 0, and each codon is looked up in the standard code until a
//! stop codon is reached. A trailing fragment shorter than a codon is never
//! translated.
//!
//! # Unknown codons
//!
//! Codons that are not in the table (lowercase letters, ambiguity codes,
//! gaps, ...) are skipped silently by [`translate`]. Whether that is the right
//! policy for every caller is an open question, so the behavior is kept as the
//! default and [`TranslationMode::Strict`] is offered for callers that want
//! such input rejected instead.
//!
//! # Examples
//!
//! ```
//! use quantbio_core::translation::translate;
//!
//! let protein = translate("ATGTTTTAA");
//! assert_eq!(protein.codes(), vec!["Met", "Phe"]);
//! assert_eq!(protein.to_string(), "MetPhe");
//! ```

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::base::{AminoAcid, CodonMeaning, CodonTable, STANDARD_CODE};
use crate::errors::TranslationError;

/// Number of characters per codon.
pub const CODON_LENGTH: usize = 3;

/// How to treat codons that are not present in the codon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TranslationMode {
    /// Skip unknown codons and keep translating.
    #[default]
    Lenient,
    /// Fail on the first unknown codon.
    Strict,
}

/// An ordered sequence of amino acids produced by translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Protein(Vec<AminoAcid>);

impl Protein {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_residues(residues: Vec<AminoAcid>) -> Self {
        Self(residues)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[AminoAcid] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<AminoAcid> {
        self.0
    }

    /// Three-letter codes in order, e.g. `["Met", "Phe"]`.
    pub fn codes(&self) -> Vec<&'static str> {
        self.0.iter().map(|aa| aa.code()).collect()
    }

    /// One-letter rendering, e.g. `"MF"`.
    pub fn to_one_letter(&self) -> String {
        self.0.iter().map(|aa| aa.one_letter()).collect()
    }

    fn push(&mut self, residue: AminoAcid) {
        self.0.push(residue);
    }
}

/// Concatenated three-letter codes, e.g. `"MetPhe"`.
impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.0 {
            f.write_str(aa.code())?;
        }
        Ok(())
    }
}

impl FromIterator<AminoAcid> for Protein {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Translate a DNA sequence with the standard code, skipping unknown codons.
///
/// Never fails. Returns an empty protein if the first codon is a stop codon,
/// the sequence is shorter than one codon, or no codon is recognized.
pub fn translate(dna: &str) -> Protein {
    // Lenient translation has no failure path.
    translate_with_table(dna, &STANDARD_CODE, TranslationMode::Lenient).unwrap_or_default()
}

/// Translate a DNA sequence with the standard code using the given mode.
pub fn translate_with(dna: &str, mode: TranslationMode) -> Result<Protein, TranslationError> {
    translate_with_table(dna, &STANDARD_CODE, mode)
}

/// Translate a DNA sequence with an explicit codon table.
///
/// Characters (not bytes) are the unit of partitioning, and every `T` is read
/// as `U` before lookup.
pub fn translate_with_table(
    dna: &str,
    table: &CodonTable,
    mode: TranslationMode,
) -> Result<Protein, TranslationError> {
    let transcript: Vec<char> = dna
        .chars()
        .map(|c| if c == 'T' { 'U' } else { c })
        .collect();

    let mut protein = Protein::new();
    for (frame_idx, codon) in transcript.chunks_exact(CODON_LENGTH).enumerate() {
        match table.lookup(codon) {
            Some(CodonMeaning::Stop) => break,
            Some(CodonMeaning::AminoAcid(residue)) => protein.push(residue),
            None => match mode {
                TranslationMode::Lenient => continue,
                TranslationMode::Strict => {
                    return Err(TranslationError::UnknownCodon {
                        position: frame_idx * CODON_LENGTH,
                        codon: codon.iter().collect(),
                    });
                }
            },
        }
    }

    Ok(protein)
}

/// Translate many sequences in parallel. Output order matches input order.
pub fn translate_batch<S>(sequences: &[S]) -> Vec<Protein>
where
    S: AsRef<str> + Sync,
{
    sequences
        .par_iter()
        .map(|seq| translate(seq.as_ref()))
        .collect()
}
