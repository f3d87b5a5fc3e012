use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use nucdist_core::DnaDistanceModel;

use crate::gapped_dna::GappedDNA;

pub fn extract_gapped_bytes<'py>(obj: &Bound<'py, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(seq) = obj.extract::<PyRef<'py, GappedDNA>>() {
        return Ok(seq.as_bytes().to_vec());
    }

    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected GappedDNA, str, or bytes-like object"))
}

pub fn parse_model(model: &str) -> PyResult<DnaDistanceModel> {
    match model {
        "p-distance" => Ok(DnaDistanceModel::PDistance),
        "jc69" => Ok(DnaDistanceModel::JukesCantor),
        "tajima-nei" => Ok(DnaDistanceModel::TajimaNei),
        "tamura" => Ok(DnaDistanceModel::Tamura),
        _ => Err(PyValueError::new_err(format!(
            "unknown DNA distance model '{}' (valid: 'p-distance', 'jc69', 'tajima-nei', 'tamura')",
            model
        ))),
    }
}
