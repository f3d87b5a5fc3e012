#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyList, PyModule};

use nucdist_core::distance::{self, MatrixOptions, OnUndefined};

use crate::utils::{extract_gapped_bytes, parse_model};

#[pyclass(frozen, name = "DistanceMatrix")]
pub struct PyDistanceMatrix {
    inner: distance::DistanceMatrix,
}

#[pymethods]
impl PyDistanceMatrix {
    #[getter]
    fn n(&self) -> usize {
        self.inner.n()
    }

    fn labels(&self) -> Vec<String> {
        self.inner.labels().iter().map(|s| s.to_string()).collect()
    }

    fn get(&self, i: usize, j: usize) -> PyResult<Option<f64>> {
        let n = self.inner.n();
        if i >= n || j >= n {
            return Err(PyValueError::new_err(format!(
                "index ({}, {}) out of range for {}x{} matrix",
                i, j, n, n
            )));
        }
        Ok(self.inner.get(i, j))
    }

    fn missing_pairs(&self) -> Vec<(usize, usize)> {
        self.inner.missing_pairs()
    }

    fn to_list_of_lists(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.inner.n();
        (0..n)
            .map(|i| (0..n).map(|j| self.inner.get(i, j)).collect())
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.n()
    }

    fn __repr__(&self) -> String {
        format!(
            "DistanceMatrix(n={}, missing={})",
            self.inner.n(),
            self.inner.missing_pairs().len()
        )
    }

    fn __str__(&self) -> String {
        let n = self.inner.n();
        let labels = self.inner.labels();
        let pad = labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(n + 1);

        let mut header = format!("{:>pad$}", "", pad = pad + 2);
        for label in labels {
            header.push_str(&format!("{:>10}", &**label));
        }
        lines.push(header);

        for (i, label) in labels.iter().enumerate() {
            let mut row = format!("{:>pad$}  ", &**label, pad = pad);
            for j in 0..n {
                match self.inner.get(i, j) {
                    Some(d) => row.push_str(&format!("{:>10.4}", d)),
                    None => row.push_str(&format!("{:>10}", "NA")),
                }
            }
            lines.push(row);
        }

        lines.join("\n")
    }
}

fn pairwise(
    a: &Bound<'_, PyAny>,
    b: &Bound<'_, PyAny>,
    f: fn(&[u8], &[u8]) -> nucdist_core::DistanceResult,
) -> PyResult<Option<f64>> {
    let a = extract_gapped_bytes(a)?;
    let b = extract_gapped_bytes(b)?;
    Ok(f(&a, &b).ok())
}

#[pyfunction]
fn p_distance(a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<Option<f64>> {
    pairwise(a, b, distance::p_distance)
}

#[pyfunction]
fn jukes_cantor(a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<Option<f64>> {
    pairwise(a, b, distance::jukes_cantor)
}

#[pyfunction]
fn tajima_nei(a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<Option<f64>> {
    pairwise(a, b, distance::tajima_nei)
}

#[pyfunction]
fn tamura(a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<Option<f64>> {
    pairwise(a, b, distance::tamura)
}

#[pyfunction]
#[pyo3(signature = (records, model = "p-distance", strict = false))]
fn distance_matrix(
    py: Python<'_>,
    records: &Bound<'_, PyList>,
    model: &str,
    strict: bool,
) -> PyResult<PyDistanceMatrix> {
    let model = parse_model(model)?;
    let on_undefined = if strict {
        OnUndefined::Raise
    } else {
        OnUndefined::Missing
    };

    let mut labels = Vec::with_capacity(records.len());
    let mut seqs = Vec::with_capacity(records.len());
    for item in records.iter() {
        let (id, seq): (String, Bound<'_, PyAny>) = item.extract().map_err(|_| {
            PyValueError::new_err("distance_matrix expects a list of (str, sequence) tuples")
        })?;
        labels.push(id.into_boxed_str());
        seqs.push(extract_gapped_bytes(&seq)?);
    }
    let seq_bytes: Vec<&[u8]> = seqs.iter().map(|s| s.as_slice()).collect();

    let options = MatrixOptions::new(model).on_undefined(on_undefined);
    let dm = py.allow_threads(|| distance::dna_distance_matrix(&seq_bytes, labels, options));

    dm.map(|d| PyDistanceMatrix { inner: d })
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDistanceMatrix>()?;
    m.add_function(wrap_pyfunction!(p_distance, m)?)?;
    m.add_function(wrap_pyfunction!(jukes_cantor, m)?)?;
    m.add_function(wrap_pyfunction!(tajima_nei, m)?)?;
    m.add_function(wrap_pyfunction!(tamura, m)?)?;
    m.add_function(wrap_pyfunction!(distance_matrix, m)?)?;
    Ok(())
}
