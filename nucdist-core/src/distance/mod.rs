pub mod freq;
pub mod matrix;
pub mod models;
pub mod pairs;

pub use freq::{combined_frequencies, nucleotide_frequencies, BaseFrequencies};
pub use matrix::{dna_distance_matrix, DistanceMatrix, MatrixOptions, OnUndefined};
pub use models::{jukes_cantor, p_distance, tajima_nei, tamura, DnaDistanceModel};
pub use pairs::{valid_pairs, Substitutions, ValidPairs};
