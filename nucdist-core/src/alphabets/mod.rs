pub mod dna;

use bit_set::BitSet;
use std::borrow::Borrow;

#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    /// First position whose symbol is outside the alphabet.
    pub fn first_invalid(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .enumerate()
            .find(|(_, &b)| !self.contains(b))
            .map(|(pos, &b)| (pos, b))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn union(&self, others: &Alphabet) -> Self {
        Alphabet {
            symbols: self.symbols.union(&others.symbols).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_merges_symbols() {
        let a = Alphabet::new(b"AC");
        let b = Alphabet::new(b"CG");
        let u = a.union(&b);
        assert_eq!(u.len(), 3);
        assert!(u.is_word(b"GACA"));
    }

    #[test]
    fn first_invalid_reports_position() {
        let a = Alphabet::new(b"ACGT");
        assert_eq!(a.first_invalid(b"ACXT"), Some((2, b'X')));
        assert_eq!(a.first_invalid(b"ACGT"), None);
    }

    #[test]
    fn empty_alphabet() {
        let a = Alphabet::default();
        assert!(a.is_empty());
        assert!(!a.contains(b'A'));
    }
}
