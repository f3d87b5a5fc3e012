#[macro_use]
mod par;

pub mod alphabets;
pub mod distance;
pub mod error;
pub mod seq;

pub use distance::{jukes_cantor, p_distance, tajima_nei, tamura, DnaDistanceModel};
pub use error::{DistanceResult, NucError, NucResult, Undefined};
