use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidBase;

/// An RNA nucleotide base.
///
/// `RnaBase` is a compact, Copyable representation backed by a single byte.
/// The mapping of variants to integers follows the row/column order of the
/// textbook codon table (U=0, C=1, A=2, G=3), which lets a codon be turned
/// into a table index with two multiply-adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RnaBase {
    U = 0,
    C = 1,
    A = 2,
    G = 3,
}

impl RnaBase {
    /// Convert from u8 index (0-3)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::U),
            1 => Some(Self::C),
            2 => Some(Self::A),
            3 => Some(Self::G),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Parse an uppercase RNA character. Lowercase letters and DNA `T` are
    /// rejected.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::U),
            'C' => Some(Self::C),
            'A' => Some(Self::A),
            'G' => Some(Self::G),
            _ => None,
        }
    }

    /// Parse an uppercase DNA character, transcribing `T` to `U`.
    ///
    /// `U` is accepted too, so already-transcribed input passes through.
    #[inline]
    pub const fn from_dna_char(c: char) -> Option<Self> {
        match c {
            'T' => Some(Self::U),
            _ => Self::from_char(c),
        }
    }

    /// Convert to an uppercase `char` representing this base.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::U => 'U',
            Self::C => 'C',
            Self::A => 'A',
            Self::G => 'G',
        }
    }

    /// Return the DNA character this base was transcribed from.
    #[inline(always)]
    pub const fn to_dna_char(self) -> char {
        match self {
            Self::U => 'T',
            other => other.to_char(),
        }
    }
}

impl TryFrom<char> for RnaBase {
    type Error = InvalidBase;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(InvalidBase(c))
    }
}

impl From<RnaBase> for char {
    #[inline(always)]
    fn from(base: RnaBase) -> char {
        base.to_char()
    }
}

impl fmt::Display for RnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Transcribe a DNA string into RNA by replacing every `T` with `U`.
///
/// All other characters, including lowercase `t`, are copied unchanged.
pub fn transcribe(dna: &str) -> String {
    dna.chars()
        .map(|c| if c == 'T' { 'U' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_index() {
        assert_eq!(RnaBase::from_index(0), Some(RnaBase::U));
        assert_eq!(RnaBase::from_index(1), Some(RnaBase::C));
        assert_eq!(RnaBase::from_index(2), Some(RnaBase::A));
        assert_eq!(RnaBase::from_index(3), Some(RnaBase::G));
        assert_eq!(RnaBase::from_index(4), None);
    }

    #[test]
    fn test_base_index_roundtrip() {
        for idx in 0..4 {
            let base = RnaBase::from_index(idx).unwrap();
            assert_eq!(base.to_index(), idx);
        }
    }

    #[test]
    fn test_base_from_char_is_case_sensitive() {
        assert_eq!(RnaBase::from_char('U'), Some(RnaBase::U));
        assert_eq!(RnaBase::from_char('G'), Some(RnaBase::G));
        assert_eq!(RnaBase::from_char('u'), None);
        assert_eq!(RnaBase::from_char('a'), None);
        assert_eq!(RnaBase::from_char('T'), None);
        assert_eq!(RnaBase::from_char('N'), None);
    }

    #[test]
    fn test_base_from_dna_char() {
        assert_eq!(RnaBase::from_dna_char('T'), Some(RnaBase::U));
        assert_eq!(RnaBase::from_dna_char('A'), Some(RnaBase::A));
        assert_eq!(RnaBase::from_dna_char('U'), Some(RnaBase::U));
        assert_eq!(RnaBase::from_dna_char('t'), None);
    }

    #[test]
    fn test_base_to_dna_char() {
        assert_eq!(RnaBase::U.to_dna_char(), 'T');
        assert_eq!(RnaBase::C.to_dna_char(), 'C');
    }

    #[test]
    fn test_base_try_from() {
        assert_eq!(RnaBase::try_from('A'), Ok(RnaBase::A));
        let err = RnaBase::try_from('x').unwrap_err();
        assert_eq!(err.0, 'x');
    }

    #[test]
    fn test_transcribe() {
        assert_eq!(transcribe("ATGTTTTAA"), "AUGUUUUAA");
        assert_eq!(transcribe(""), "");
        // Only uppercase T is transcribed
        assert_eq!(transcribe("tT"), "tU");
        assert_eq!(transcribe("ACGN"), "ACGN");
    }

    #[test]
    fn test_base_size() {
        assert_eq!(std::mem::size_of::<RnaBase>(), 1);
    }
}
