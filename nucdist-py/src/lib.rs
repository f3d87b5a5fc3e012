use pyo3::prelude::*;

mod distance;
mod gapped_dna;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    gapped_dna::register(m)?;
    distance::register(m)?;
    Ok(())
}
