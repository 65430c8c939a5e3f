//! Codons and the standard genetic code.
//!
//! The codon table is a `static` 64-entry array indexed directly by codon, so
//! it is built at compile time, never mutated, and can be read from any number
//! of threads without synchronization.

use core::fmt;

use super::amino_acid::AminoAcid;
use super::rna::RnaBase;

/// A triplet of RNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon(pub [RnaBase; 3]);

impl Codon {
    /// Number of distinct codons.
    pub const COUNT: usize = 64;

    /// Parse three RNA characters. Returns `None` if the slice is not exactly
    /// three uppercase RNA bases.
    pub fn from_chars(chars: &[char]) -> Option<Self> {
        match chars {
            [a, b, c] => Some(Self([
                RnaBase::from_char(*a)?,
                RnaBase::from_char(*b)?,
                RnaBase::from_char(*c)?,
            ])),
            _ => None,
        }
    }

    /// Table index in U, C, A, G order (UUU = 0, GGG = 63).
    #[inline]
    pub const fn index(self) -> usize {
        let [a, b, c] = self.0;
        (a.to_index() as usize) * 16 + (b.to_index() as usize) * 4 + c.to_index() as usize
    }

    /// Inverse of [`Codon::index`]. Returns `None` for indices >= 64.
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx >= Self::COUNT {
            return None;
        }
        match (
            RnaBase::from_index((idx / 16) as u8),
            RnaBase::from_index(((idx / 4) % 4) as u8),
            RnaBase::from_index((idx % 4) as u8),
        ) {
            (Some(a), Some(b), Some(c)) => Some(Self([a, b, c])),
            _ => None,
        }
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

/// What a codon encodes: an amino acid or the end of the reading frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonMeaning {
    AminoAcid(AminoAcid),
    Stop,
}

impl CodonMeaning {
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Read-only mapping from every codon to its meaning.
#[derive(Debug)]
pub struct CodonTable {
    entries: [CodonMeaning; Codon::COUNT],
}

impl CodonTable {
    /// The standard genetic code.
    pub fn standard() -> &'static CodonTable {
        &STANDARD_CODE
    }

    /// Meaning of a parsed codon.
    #[inline]
    pub fn get(&self, codon: Codon) -> CodonMeaning {
        self.entries[codon.index()]
    }

    /// Meaning of three raw RNA characters, or `None` if they do not form a
    /// codon in the table (wrong length, lowercase, `T`, ambiguity codes, ...).
    #[inline]
    pub fn lookup(&self, chars: &[char]) -> Option<CodonMeaning> {
        Codon::from_chars(chars).map(|codon| self.get(codon))
    }

    /// Iterate over `(codon, meaning)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Codon, CodonMeaning)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(idx, meaning)| Codon::from_index(idx).map(|codon| (codon, *meaning)))
    }

    /// Codons that encode `amino_acid`.
    pub fn codons_for(&self, amino_acid: AminoAcid) -> Vec<Codon> {
        self.iter()
            .filter(|(_, meaning)| *meaning == CodonMeaning::AminoAcid(amino_acid))
            .map(|(codon, _)| codon)
            .collect()
    }

    /// Codons that terminate translation.
    pub fn stop_codons(&self) -> Vec<Codon> {
        self.iter()
            .filter(|(_, meaning)| meaning.is_stop())
            .map(|(codon, _)| codon)
            .collect()
    }
}

const STOP: CodonMeaning = CodonMeaning::Stop;

const fn aa(amino_acid: AminoAcid) -> CodonMeaning {
    CodonMeaning::AminoAcid(amino_acid)
}

/// The standard genetic code, rows in U, C, A, G order of the first base.
#[rustfmt::skip]
pub static STANDARD_CODE: CodonTable = {
    use AminoAcid::*;
    CodonTable {
        entries: [
            // UUx, UCx, UAx, UGx
            aa(Phe), aa(Phe), aa(Leu), aa(Leu),
            aa(Ser), aa(Ser), aa(Ser), aa(Ser),
            aa(Tyr), aa(Tyr), STOP, STOP,
            aa(Cys), aa(Cys), STOP, aa(Trp),
            // CUx, CCx, CAx, CGx
            aa(Leu), aa(Leu), aa(Leu), aa(Leu),
            aa(Pro), aa(Pro), aa(Pro), aa(Pro),
            aa(His), aa(His), aa(Gln), aa(Gln),
            aa(Arg), aa(Arg), aa(Arg), aa(Arg),
            // AUx, ACx, AAx, AGx
            aa(Ile), aa(Ile), aa(Ile), aa(Met),
            aa(Thr), aa(Thr), aa(Thr), aa(Thr),
            aa(Asn), aa(Asn), aa(Lys), aa(Lys),
            aa(Ser), aa(Ser), aa(Arg), aa(Arg),
            // GUx, GCx, GAx, GGx
            aa(Val), aa(Val), aa(Val), aa(Val),
            aa(Ala), aa(Ala), aa(Ala), aa(Ala),
            aa(Asp), aa(Asp), aa(Glu), aa(Glu),
            aa(Gly), aa(Gly), aa(Gly), aa(Gly),
        ],
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_codon_index_roundtrip() {
        for idx in 0..Codon::COUNT {
            let codon = Codon::from_index(idx).unwrap();
            assert_eq!(codon.index(), idx);
        }
        assert_eq!(Codon::from_index(64), None);
    }

    #[test]
    fn test_codon_from_chars() {
        let codon = Codon::from_chars(&chars("AUG")).unwrap();
        assert_eq!(codon.to_string(), "AUG");
        assert_eq!(Codon::from_chars(&chars("AU")), None);
        assert_eq!(Codon::from_chars(&chars("AUGC")), None);
        assert_eq!(Codon::from_chars(&chars("ATG")), None);
        assert_eq!(Codon::from_chars(&chars("aug")), None);
    }

    #[test]
    fn test_standard_code_spot_checks() {
        let table = CodonTable::standard();
        let expect = [
            ("UUU", aa(AminoAcid::Phe)),
            ("UUA", aa(AminoAcid::Leu)),
            ("UGG", aa(AminoAcid::Trp)),
            ("CAU", aa(AminoAcid::His)),
            ("CGG", aa(AminoAcid::Arg)),
            ("AUA", aa(AminoAcid::Ile)),
            ("AUG", aa(AminoAcid::Met)),
            ("AGU", aa(AminoAcid::Ser)),
            ("AGA", aa(AminoAcid::Arg)),
            ("GAC", aa(AminoAcid::Asp)),
            ("GAG", aa(AminoAcid::Glu)),
            ("GGG", aa(AminoAcid::Gly)),
        ];
        for (codon, meaning) in expect {
            assert_eq!(table.lookup(&chars(codon)), Some(meaning), "codon {codon}");
        }
    }

    #[test]
    fn test_stop_codons() {
        let stops: Vec<String> = STANDARD_CODE
            .stop_codons()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(stops, vec!["UAA", "UAG", "UGA"]);
    }

    #[test]
    fn test_every_amino_acid_is_encoded() {
        let mut sense = 0;
        for amino_acid in AminoAcid::ALL {
            let codons = STANDARD_CODE.codons_for(amino_acid);
            assert!(!codons.is_empty(), "{amino_acid} has no codon");
            sense += codons.len();
        }
        assert_eq!(sense, 61);
        assert_eq!(STANDARD_CODE.codons_for(AminoAcid::Met).len(), 1);
        assert_eq!(STANDARD_CODE.codons_for(AminoAcid::Leu).len(), 6);
        assert_eq!(STANDARD_CODE.codons_for(AminoAcid::Ser).len(), 6);
        assert_eq!(STANDARD_CODE.codons_for(AminoAcid::Arg).len(), 6);
    }

    #[test]
    fn test_lookup_rejects_non_codons() {
        assert_eq!(STANDARD_CODE.lookup(&chars("NNN")), None);
        assert_eq!(STANDARD_CODE.lookup(&chars("AT")), None);
        assert_eq!(STANDARD_CODE.lookup(&chars("auu")), None);
    }
}
