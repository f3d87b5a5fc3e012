use pyo3::basic::CompareOp;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule, PyString};

use nucdist_core::seq::GappedDnaSeq;

use crate::utils::parse_model;

#[allow(clippy::upper_case_acronyms)]
#[pyclass(frozen)]
#[derive(Clone)]
pub struct GappedDNA {
    pub(crate) inner: GappedDnaSeq,
}

impl GappedDNA {
    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

#[pymethods]
impl GappedDNA {
    #[new]
    fn new(seq: &Bound<'_, PyAny>) -> PyResult<Self> {
        let bytes: Vec<u8> = if let Ok(s) = seq.downcast::<PyString>() {
            s.to_str()?.as_bytes().to_vec()
        } else {
            seq.extract::<Vec<u8>>()
                .map_err(|_| PyValueError::new_err("GappedDNA() expects str or bytes-like input"))?
        };

        let inner = GappedDnaSeq::new(bytes).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    fn ungapped(&self) -> String {
        String::from_utf8_lossy(&self.inner.ungapped()).into_owned()
    }

    /// Distance to another row of the same alignment, or None when the
    /// model is undefined for this pair.
    #[pyo3(signature = (other, model = "p-distance"))]
    fn distance_to(&self, other: PyRef<'_, GappedDNA>, model: &str) -> PyResult<Option<f64>> {
        let model = parse_model(model)?;
        Ok(self.inner.distance_to(&other.inner, model).ok())
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.as_bytes())
    }

    fn __len__(&self) -> usize {
        self.as_bytes().len()
    }

    fn __richcmp__(&self, other: PyRef<'_, GappedDNA>, op: CompareOp) -> PyResult<bool> {
        let other = other.as_bytes();
        match op {
            CompareOp::Eq => Ok(self.as_bytes() == other),
            CompareOp::Ne => Ok(self.as_bytes() != other),
            CompareOp::Lt => Ok(self.as_bytes() < other),
            CompareOp::Le => Ok(self.as_bytes() <= other),
            CompareOp::Gt => Ok(self.as_bytes() > other),
            CompareOp::Ge => Ok(self.as_bytes() >= other),
        }
    }

    fn __str__(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    fn __repr__(&self) -> String {
        let s = std::str::from_utf8(self.as_bytes()).unwrap_or("<bytes>");
        format!("GappedDNA({s:?})")
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GappedDNA>()?;
    Ok(())
}
