use thiserror::Error;

/// Why a pairwise distance could not be estimated.
///
/// Every estimator returns this instead of letting a NaN, an infinity or a
/// panic escape. It is distinct from a legitimate distance of zero.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Undefined {
    #[error("no comparable (ungapped) sites")]
    NoValidSites,

    #[error("no A/C/G/T bases to estimate nucleotide frequencies from")]
    NoBases,

    #[error("{model}: zero denominator in term '{term}'")]
    ZeroDenominator {
        model: &'static str,
        term: &'static str,
    },

    #[error("{model}: sequences too diverged (log argument {arg})")]
    Saturated { model: &'static str, arg: f64 },

    #[error("{model}: estimate is not finite")]
    NonFinite { model: &'static str },
}

pub type DistanceResult = Result<f64, Undefined>;

#[derive(Debug, Error)]
pub enum NucError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("need at least 2 sequences, got {n}")]
    TooFewSequences { n: usize },

    #[error("label count mismatch (labels={labels}, seqs={seqs})")]
    LabelCountMismatch { labels: usize, seqs: usize },

    #[error("sequence {index} has length {len} but expected {expected}")]
    SequenceLengthMismatch {
        index: usize,
        len: usize,
        expected: usize,
    },

    #[error("distance between sequences {i} and {j} is undefined: {source}")]
    UndefinedDistance {
        i: usize,
        j: usize,
        #[source]
        source: Undefined,
    },
}

pub type NucResult<T> = Result<T, NucError>;
