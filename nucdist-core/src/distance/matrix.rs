use tracing::{debug, instrument};

use crate::error::{NucError, NucResult};

use super::models::DnaDistanceModel;

/// What to do with a pair whose distance is undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OnUndefined {
    /// Leave the cell empty and keep going.
    #[default]
    Missing,
    Raise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixOptions {
    pub model: DnaDistanceModel,
    pub on_undefined: OnUndefined,
}

impl MatrixOptions {
    pub fn new(model: DnaDistanceModel) -> Self {
        Self {
            model,
            on_undefined: OnUndefined::default(),
        }
    }

    pub fn on_undefined(mut self, on_undefined: OnUndefined) -> Self {
        self.on_undefined = on_undefined;
        self
    }
}

/// Symmetric matrix of pairwise distances. Undefined pairs are `None`.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    labels: Vec<Box<str>>,
    data: Vec<Option<f64>>,
    n: usize,
}

impl DistanceMatrix {
    pub fn new(labels: Vec<Box<str>>, data: Vec<Option<f64>>) -> Self {
        let n = labels.len();
        assert_eq!(
            data.len(),
            n * n,
            "distance matrix data length mismatch: expected {}, got {}",
            n * n,
            data.len()
        );
        Self { labels, data, n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn labels(&self) -> &[Box<str>] {
        &self.labels
    }

    pub fn data(&self) -> &[Option<f64>] {
        &self.data
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, val: Option<f64>) {
        self.data[i * self.n + j] = val;
        self.data[j * self.n + i] = val;
    }

    /// Upper-triangle index pairs whose distance is undefined.
    pub fn missing_pairs(&self) -> Vec<(usize, usize)> {
        (0..self.n)
            .flat_map(|i| ((i + 1)..self.n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.get(i, j).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.data.iter().all(Option::is_some)
    }
}

fn validate_distance_inputs(seqs: &[&[u8]], labels: &[Box<str>]) -> NucResult<()> {
    let n = seqs.len();
    if n < 2 {
        return Err(NucError::TooFewSequences { n });
    }
    if labels.len() != n {
        return Err(NucError::LabelCountMismatch {
            labels: labels.len(),
            seqs: n,
        });
    }
    let expected_len = seqs[0].len();
    for (idx, seq) in seqs.iter().enumerate() {
        if seq.len() != expected_len {
            return Err(NucError::SequenceLengthMismatch {
                index: idx,
                len: seq.len(),
                expected: expected_len,
            });
        }
    }
    Ok(())
}

fn compute_pair(
    seqs: &[&[u8]],
    options: MatrixOptions,
    i: usize,
    j: usize,
) -> NucResult<(usize, usize, Option<f64>)> {
    match options.model.estimate(seqs[i], seqs[j]) {
        Ok(d) => Ok((i, j, Some(d))),
        Err(source) => match options.on_undefined {
            OnUndefined::Missing => {
                debug!(i, j, reason = %source, "distance undefined, cell left missing");
                Ok((i, j, None))
            }
            OnUndefined::Raise => Err(NucError::UndefinedDistance { i, j, source }),
        },
    }
}

/// All-against-all distances for the rows of one alignment.
#[instrument(skip_all, fields(n = seqs.len(), model = options.model.name()))]
pub fn dna_distance_matrix(
    seqs: &[&[u8]],
    labels: Vec<Box<str>>,
    options: MatrixOptions,
) -> NucResult<DistanceMatrix> {
    validate_distance_inputs(seqs, &labels)?;
    let n = seqs.len();

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let results: NucResult<Vec<(usize, usize, Option<f64>)>> =
        par_try_map!(&pairs, |&(i, j)| compute_pair(seqs, options, i, j));

    let mut data = vec![Some(0.0f64); n * n];
    let mut missing = 0usize;
    for (i, j, d) in results? {
        missing += usize::from(d.is_none());
        data[i * n + j] = d;
        data[j * n + i] = d;
    }
    debug!(pairs = pairs.len(), missing, "distance matrix built");

    Ok(DistanceMatrix::new(labels, data))
}
