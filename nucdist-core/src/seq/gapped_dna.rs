use crate::alphabets::{dna, Alphabet};
use crate::distance::DnaDistanceModel;
use crate::error::{DistanceResult, NucError, NucResult};
use crate::seq::traits::SeqBytes;

use std::sync::LazyLock;

static GAPPED_DNA_IUPAC: LazyLock<Alphabet> = LazyLock::new(dna::gapped_iupac_alphabet);

/// One row of a nucleotide alignment: IUPAC codes plus `-`/`.` gaps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GappedDnaSeq {
    bytes: Vec<u8>,
}

impl GappedDnaSeq {
    pub fn new(bytes: Vec<u8>) -> NucResult<Self> {
        if let Some((pos, b)) = GAPPED_DNA_IUPAC.first_invalid(&bytes) {
            return Err(NucError::InvalidChar { ch: b as char, pos });
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Strip gap characters (`-` and `.`).
    pub fn ungapped(&self) -> Vec<u8> {
        self.bytes
            .iter()
            .copied()
            .filter(|&b| !dna::is_gap(b))
            .collect()
    }

    /// Estimate the distance to another row of the same alignment.
    pub fn distance_to(&self, other: &GappedDnaSeq, model: DnaDistanceModel) -> DistanceResult {
        model.estimate(&self.bytes, &other.bytes)
    }
}

impl SeqBytes for GappedDnaSeq {
    fn as_bytes(&self) -> &[u8] {
        GappedDnaSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> NucResult<Self> {
        GappedDnaSeq::new(bytes)
    }
}
