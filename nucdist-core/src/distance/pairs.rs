use crate::alphabets::dna::{base_index, is_gap, is_strict_base, is_transition, is_transversion};

/// Ungapped, upper-cased column pairs of two aligned sequences, in column
/// order. Pairing stops at the shorter sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidPairs {
    pairs: Vec<(u8, u8)>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub transitions: usize,
    pub transversions: usize,
}

pub fn valid_pairs(a: &[u8], b: &[u8]) -> ValidPairs {
    let pairs = a
        .iter()
        .zip(b.iter())
        .filter(|&(&x, &y)| !is_gap(x) && !is_gap(y))
        .map(|(&x, &y)| (x.to_ascii_uppercase(), y.to_ascii_uppercase()))
        .collect();
    ValidPairs { pairs }
}

impl ValidPairs {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u8, u8)> + '_ {
        self.pairs.iter()
    }

    /// Pairs whose symbols differ, ambiguity codes included.
    pub fn mismatches(&self) -> usize {
        self.pairs.iter().filter(|(x, y)| x != y).count()
    }

    /// `(compared, differing)` over pairs where both symbols are A/C/G/T.
    pub fn strict_comparisons(&self) -> (usize, usize) {
        self.pairs
            .iter()
            .filter(|&&(x, y)| is_strict_base(x) && is_strict_base(y))
            .fold((0, 0), |(n, d), &(x, y)| (n + 1, d + usize::from(x != y)))
    }

    pub fn substitutions(&self) -> Substitutions {
        let mut subs = Substitutions::default();
        for &(x, y) in &self.pairs {
            if is_transition(x, y) {
                subs.transitions += 1;
            } else if is_transversion(x, y) {
                subs.transversions += 1;
            }
        }
        subs
    }

    /// Ordered counts of strict-base pairs, indexed `[first][second]` in
    /// A, C, G, T order.
    pub fn base_pair_counts(&self) -> [[usize; 4]; 4] {
        let mut counts = [[0usize; 4]; 4];
        for &(x, y) in &self.pairs {
            if let (Some(i), Some(j)) = (base_index(x), base_index(y)) {
                counts[i][j] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_on_either_side_are_dropped() {
        let pairs = valid_pairs(b"AC-T.", b"AGGT-");
        assert_eq!(pairs.as_slice(), &[(b'A', b'A'), (b'C', b'G'), (b'T', b'T')]);
    }

    #[test]
    fn shorter_sequence_wins() {
        let pairs = valid_pairs(b"ACGTAA", b"ACG");
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn case_is_normalised() {
        let pairs = valid_pairs(b"acgt", b"ACGT");
        assert_eq!(pairs.mismatches(), 0);
    }

    #[test]
    fn all_gaps_is_empty() {
        assert!(valid_pairs(b"----", b"ACGT").is_empty());
        assert!(valid_pairs(b"", b"").is_empty());
    }

    #[test]
    fn ambiguity_codes_count_as_mismatch_but_not_strict() {
        let pairs = valid_pairs(b"ANGT", b"ACGT");
        assert_eq!(pairs.mismatches(), 1);
        assert_eq!(pairs.strict_comparisons(), (3, 0));
    }

    #[test]
    fn substitution_tally() {
        // A/G transition, C/A transversion, T/C transition, G/N neither
        let subs = valid_pairs(b"ACTG", b"GACN").substitutions();
        assert_eq!(subs.transitions, 2);
        assert_eq!(subs.transversions, 1);
    }

    #[test]
    fn base_pair_counts_are_ordered() {
        let counts = valid_pairs(b"ACCA", b"CAAC").base_pair_counts();
        assert_eq!(counts[0][1], 2);
        assert_eq!(counts[1][0], 2);
        assert_eq!(counts[0][0], 0);
    }
}
