use crate::alphabets::dna::{base_index, BASES};
use crate::error::Undefined;

/// Relative A, C, G, T frequencies. Non-strict symbols are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseFrequencies([f64; 4]);

impl BaseFrequencies {
    fn from_counts(counts: [usize; 4]) -> Result<Self, Undefined> {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Err(Undefined::NoBases);
        }
        let total = total as f64;
        Ok(Self(counts.map(|c| c as f64 / total)))
    }

    /// Frequency at an index of [`BASES`].
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }

    pub fn a(&self) -> f64 {
        self.0[0]
    }

    pub fn c(&self) -> f64 {
        self.0[1]
    }

    pub fn g(&self) -> f64 {
        self.0[2]
    }

    pub fn t(&self) -> f64 {
        self.0[3]
    }

    pub fn gc_content(&self) -> f64 {
        self.c() + self.g()
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.0.iter().map(|f| f * f).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        BASES.iter().copied().zip(self.0.iter().copied())
    }
}

fn count_bases(seq: &[u8], counts: &mut [usize; 4]) {
    for &b in seq {
        if let Some(i) = base_index(b.to_ascii_uppercase()) {
            counts[i] += 1;
        }
    }
}

pub fn nucleotide_frequencies(seq: &[u8]) -> Result<BaseFrequencies, Undefined> {
    let mut counts = [0usize; 4];
    count_bases(seq, &mut counts);
    BaseFrequencies::from_counts(counts)
}

/// Frequencies over the concatenation of two sequences.
pub fn combined_frequencies(a: &[u8], b: &[u8]) -> Result<BaseFrequencies, Undefined> {
    let mut counts = [0usize; 4];
    count_bases(a, &mut counts);
    count_bases(b, &mut counts);
    BaseFrequencies::from_counts(counts)
}
