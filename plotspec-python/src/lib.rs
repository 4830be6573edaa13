//! Python bindings for plotspec
//!
//! Specs cross the boundary as plain Python dicts (single unit) or lists of
//! dicts (collection), the same shape the JSON writer produces.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyList, PyString};
use serde_json::Value;

use plotspec::LabelSpec;

// ============================================================================
// Conversion helpers
// ============================================================================

fn json_to_py<'py>(py: Python<'py>, value: &Value) -> PyResult<Bound<'py, PyAny>> {
    let obj = match value {
        Value::Null => py.None().into_bound(py),
        Value::Bool(b) => PyBool::new(py, *b).to_owned().into_any(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.into_pyobject(py)?.into_any(),
            None => n.as_f64().unwrap_or(f64::NAN).into_pyobject(py)?.into_any(),
        },
        Value::String(s) => PyString::new(py, s).into_any(),
        Value::Array(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(json_to_py(py, item)?)?;
            }
            list.into_any()
        }
        Value::Object(map) => {
            let dict = PyDict::new(py);
            for (key, item) in map {
                dict.set_item(key, json_to_py(py, item)?)?;
            }
            dict.into_any()
        }
    };
    Ok(obj)
}

fn spec_to_py<'py, T: serde::Serialize>(py: Python<'py>, spec: &T) -> PyResult<Bound<'py, PyAny>> {
    let value = serde_json::to_value(spec)
        .map_err(|e| PyValueError::new_err(format!("Failed to serialize spec: {}", e)))?;
    json_to_py(py, &value)
}

// ============================================================================
// Builders
// ============================================================================

/// Add title to the plot.
#[pyfunction]
fn ggtitle<'py>(py: Python<'py>, label: String) -> PyResult<Bound<'py, PyAny>> {
    spec_to_py(py, &plotspec::ggtitle(label))
}

/// Add label to the x axis.
#[pyfunction]
fn xlab<'py>(py: Python<'py>, label: String) -> PyResult<Bound<'py, PyAny>> {
    spec_to_py(py, &plotspec::xlab(label))
}

/// Add label to the y axis.
#[pyfunction]
fn ylab<'py>(py: Python<'py>, label: String) -> PyResult<Bound<'py, PyAny>> {
    spec_to_py(py, &plotspec::ylab(label))
}

/// Change plot title, axis labels and legend titles.
///
/// Keyword arguments are processed in the order given; `title` sets the
/// plot title and every other name is taken as an aesthetic.
#[pyfunction]
#[pyo3(signature = (**kwargs))]
fn labs<'py>(
    py: Python<'py>,
    kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyAny>> {
    let mut pairs = Vec::new();
    if let Some(kwargs) = kwargs {
        for (key, value) in kwargs.iter() {
            pairs.push((key.extract::<String>()?, value.extract::<String>()?));
        }
    }
    let spec: LabelSpec = plotspec::labs(pairs);
    spec_to_py(py, &spec)
}

// ============================================================================
// Module
// ============================================================================

#[pymodule]
fn _plotspec(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ggtitle, m)?)?;
    m.add_function(wrap_pyfunction!(xlab, m)?)?;
    m.add_function(wrap_pyfunction!(ylab, m)?)?;
    m.add_function(wrap_pyfunction!(labs, m)?)?;
    m.add("__version__", plotspec::VERSION)?;
    Ok(())
}
