//! Python bindings that expose the recorder and its snapshots via PyO3.
//!
//! Python callers can pass any object, so argument conversion is where
//! non-integral input actually shows up. Every library error is raised as
//! `ValueError`.
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyFloat, PyInt, PyModule},
};

use crate::{CaptureConfig, CaptureError, Number, Recorder, Snapshot};

fn to_py_err(err: CaptureError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_number(value: &Bound<'_, PyAny>) -> PyResult<Number> {
    if value.is_instance_of::<PyFloat>() {
        return Ok(Number::Float(value.extract::<f64>()?));
    }
    if value.is_instance_of::<PyInt>() {
        return match value.extract::<i64>() {
            Ok(int) => Ok(Number::Int(int)),
            // Arbitrary-precision ints beyond i64 sit outside every domain anyway.
            Err(_) if value.lt(0)? => Ok(Number::Int(i64::MIN)),
            Err(_) => Ok(Number::Int(i64::MAX)),
        };
    }
    Err(to_py_err(CaptureError::InvalidType {
        value: value.to_string(),
    }))
}

/// Python-facing recorder: `add` values, then `build_stats`.
#[pyclass(name = "DataCapture")]
#[derive(Debug)]
pub struct PyDataCapture {
    inner: Recorder,
}

#[pymethods]
impl PyDataCapture {
    #[new]
    #[pyo3(signature = (max_numbers = crate::DEFAULT_MAX_VALUE))]
    /// Create a recorder over `[0, max_numbers]`.
    pub fn new(max_numbers: u32) -> PyResult<Self> {
        let config = CaptureConfig::default().with_max_value(max_numbers);
        let inner =
            Recorder::with_config(config).map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Record one integer in the configured domain.
    pub fn add(&mut self, number: &Bound<'_, PyAny>) -> PyResult<()> {
        let number = to_number(number)?;
        self.inner.insert(number).map_err(to_py_err)
    }

    /// Number of recorded values.
    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// Freeze the current values into a `Stats` object.
    pub fn build_stats(&self) -> PyResult<PyStats> {
        let inner = self.inner.snapshot().map_err(to_py_err)?;
        Ok(PyStats { inner })
    }
}

/// Python-facing snapshot answering count queries.
#[pyclass(name = "Stats", frozen)]
#[derive(Debug)]
pub struct PyStats {
    inner: Snapshot,
}

#[pymethods]
impl PyStats {
    /// Count of values strictly less than `number`.
    pub fn less(&self, number: &Bound<'_, PyAny>) -> PyResult<usize> {
        self.inner.less(to_number(number)?).map_err(to_py_err)
    }

    /// Count of values strictly greater than `number`.
    pub fn greater(&self, number: &Bound<'_, PyAny>) -> PyResult<usize> {
        self.inner.greater(to_number(number)?).map_err(to_py_err)
    }

    /// Count of values in `[min_number, max_number]`.
    pub fn between(
        &self,
        min_number: &Bound<'_, PyAny>,
        max_number: &Bound<'_, PyAny>,
    ) -> PyResult<usize> {
        let lo = to_number(min_number)?;
        let hi = to_number(max_number)?;
        self.inner.between(lo, hi).map_err(to_py_err)
    }

    /// All recorded values in ascending order.
    #[getter]
    pub fn sorted_numbers(&self) -> Vec<u32> {
        self.inner.sorted_values().to_vec()
    }
}

/// Create Python module.
#[pymodule]
pub fn tallyrank_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDataCapture>()?;
    m.add_class::<PyStats>()?;
    Ok(())
}
