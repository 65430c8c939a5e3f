use anyhow::{Context, Result};
use quantbio_core::errors::TranslationError;
use quantbio_core::translation::{Protein, TranslationMode, translate, translate_with};
use rayon::prelude::*;

pub fn translate_sequences(sequences: &[String], strict: bool, one_letter: bool) -> Result<()> {
    let proteins: Vec<Protein> = if strict {
        sequences
            .iter()
            .enumerate()
            .map(|(i, seq)| {
                translate_with(seq, TranslationMode::Strict)
                    .with_context(|| format!("Failed to translate sequence {}", i + 1))
            })
            .collect::<Result<_>>()?
    } else {
        // Strict first; only sequences with unknown codons are re-read leniently.
        let results: Vec<(Protein, Option<TranslationError>)> = sequences
            .par_iter()
            .map(|seq| match translate_with(seq, TranslationMode::Strict) {
                Ok(protein) => (protein, None),
                Err(e) => (translate(seq), Some(e)),
            })
            .collect();

        results
            .into_iter()
            .enumerate()
            .map(|(i, (protein, skipped))| {
                if let Some(e) = skipped {
                    eprintln!(
                        "Warning: sequence {}: {e}; unknown codons were skipped (use --strict to reject)",
                        i + 1
                    );
                }
                protein
            })
            .collect()
    };

    for protein in &proteins {
        if one_letter {
            println!("{}", protein.to_one_letter());
        } else {
            println!("{protein}");
        }
    }

    Ok(())
}
