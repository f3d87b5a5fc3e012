use crate::alphabets::Alphabet;

pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTRYSWKMBDHVNZacgtryswkmbdhvnz")
}

/// IUPAC codes plus the gap markers `-` and `.`.
pub fn gapped_iupac_alphabet() -> Alphabet {
    iupac_alphabet().union(&Alphabet::new(b"-."))
}

/// Canonical base order used by every frequency vector.
pub const BASES: [u8; 4] = *b"ACGT";

#[inline]
pub fn is_gap(b: u8) -> bool {
    b == b'-' || b == b'.'
}

/// Index of an upper-case strict base in [`BASES`].
#[inline]
pub fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

#[inline]
pub fn is_strict_base(b: u8) -> bool {
    base_index(b).is_some()
}

// Purine <-> purine or pyrimidine <-> pyrimidine.
#[inline]
pub fn is_transition(x: u8, y: u8) -> bool {
    matches!(
        (x, y),
        (b'A', b'G') | (b'G', b'A') | (b'C', b'T') | (b'T', b'C')
    )
}

#[inline]
pub fn is_transversion(x: u8, y: u8) -> bool {
    x != y && is_strict_base(x) && is_strict_base(y) && !is_transition(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(iupac_alphabet().is_word(b"GATTACA"));
    }

    #[test]
    fn is_no_word() {
        assert!(!iupac_alphabet().is_word(b"gaUUaca"));
    }

    #[test]
    fn gapped_accepts_gaps_and_ambiguity() {
        assert!(gapped_iupac_alphabet().is_word(b"AC-GT.Nryk"));
        assert!(!gapped_iupac_alphabet().is_word(b"AC#"));
    }

    #[test]
    fn substitution_classes() {
        assert!(is_transition(b'A', b'G'));
        assert!(is_transition(b'T', b'C'));
        assert!(!is_transition(b'A', b'C'));
        assert!(is_transversion(b'A', b'T'));
        assert!(is_transversion(b'G', b'C'));
        assert!(!is_transversion(b'A', b'A'));
        assert!(!is_transversion(b'A', b'N'));
    }

    #[test]
    fn transversion_count_is_eight() {
        let n = BASES
            .iter()
            .flat_map(|&x| BASES.iter().map(move |&y| (x, y)))
            .filter(|&(x, y)| is_transversion(x, y))
            .count();
        assert_eq!(n, 8);
    }

    #[test]
    fn base_index_is_upper_case_only() {
        assert_eq!(base_index(b'G'), Some(2));
        assert_eq!(base_index(b'g'), None);
        assert_eq!(base_index(b'-'), None);
    }
}
