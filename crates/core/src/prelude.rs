//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use quantbio_core::prelude::*;
//!
//! let protein = translate("ATGGCC");
//! assert_eq!(protein.to_string(), "MetAla");
//! ```

pub use crate::base::{AminoAcid, Codon, CodonMeaning, CodonTable, RnaBase, STANDARD_CODE};
pub use crate::distance::{distance_matrix, hamming_distance, pairwise_distances, p_distance};
pub use crate::errors::{DistanceError, ParameterError, TranslationError};
pub use crate::growth::{
    GrowthCurve, GrowthParams, ThresholdParams, ThresholdRun, estimate_threshold_time,
    generate_growth_curves,
};
pub use crate::translation::{Protein, TranslationMode, translate, translate_batch, translate_with};
