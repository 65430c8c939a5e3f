use thiserror::Error;

/// Error returned when attempting to parse a character that is not one of the
/// four RNA bases (`U`, `C`, `A`, `G`).
///
/// Parsing is case-sensitive, so lowercase bases are rejected as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid RNA base: '{0}'")]
pub struct InvalidBase(pub char);

/// Errors that can occur when comparing two sequences position by position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The two inputs do not have the same number of characters.
    #[error("Sequence length mismatch: {len1} vs {len2} (Hamming distance requires equal lengths)")]
    LengthMismatch { len1: usize, len2: usize },
}

/// Errors that can occur during strict translation.
///
/// Lenient translation never fails; unknown codons are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A codon in the reading frame is not present in the codon table.
    #[error("Unknown codon '{codon}' at position {position}")]
    UnknownCodon {
        /// Offset of the codon's first character in the input sequence
        position: usize,
        /// The transcribed codon as it appeared in the frame
        codon: String,
    },
}

/// Errors raised when validating growth model parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A parameter that must be strictly positive was not.
    #[error("Invalid parameter {name}: {value} (must be > 0)")]
    NonPositive { name: &'static str, value: f64 },

    /// A parameter fell outside its permitted range.
    #[error("Invalid parameter {name}: {value} (must be within {range})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        range: &'static str,
    },

    /// A parameter was NaN or infinite.
    #[error("Invalid parameter {name}: value must be finite")]
    NotFinite { name: &'static str },

    /// Euler steps are too small to reach the threshold in bounded time.
    #[error("Threshold not reachable: about {estimated_steps:.0} steps needed (limit {limit})")]
    Unreachable { estimated_steps: f64, limit: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = DistanceError::LengthMismatch { len1: 3, len2: 8 };
        let msg = err.to_string();
        assert!(msg.contains("3 vs 8"));
        assert!(msg.contains("equal lengths"));
    }

    #[test]
    fn test_unknown_codon_display() {
        let err = TranslationError::UnknownCodon {
            position: 6,
            codon: "UNA".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown codon 'UNA' at position 6");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::NonPositive {
            name: "carrying_capacity",
            value: -1.0,
        };
        assert!(err.to_string().contains("carrying_capacity"));

        let err = ParameterError::OutOfRange {
            name: "fraction",
            value: 1.5,
            range: "(0, 1)",
        };
        assert!(err.to_string().contains("(0, 1)"));

        let err = ParameterError::Unreachable {
            estimated_steps: 2.5e9,
            limit: 100_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Threshold not reachable: about 2500000000 steps needed (limit 100000000)"
        );
    }

    #[test]
    fn test_invalid_base_display() {
        assert_eq!(InvalidBase('t').to_string(), "Invalid RNA base: 't'");
    }
}
