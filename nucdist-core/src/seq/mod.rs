pub mod gapped_dna;
pub mod traits;

pub use gapped_dna::GappedDnaSeq;
pub use traits::SeqBytes;
