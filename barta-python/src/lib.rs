//! Python extension module for the Barta feature extraction engine.
//!
//! The serving layer feeds message text in and gets back the 17-element
//! vector the classifier consumes. Non-string input is coerced with
//! `str()` semantics; extraction itself never raises.

use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Coerce an arbitrary Python object to text. A failing `__str__` degrades
/// to the empty string rather than raising.
fn coerce_text(value: &Bound<'_, PyAny>) -> String {
    if let Ok(text) = value.extract::<String>() {
        return text;
    }
    value
        .str()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extract the fixed 17-element feature vector from one message.
#[pyfunction]
fn extract_features(text: &Bound<'_, PyAny>) -> Vec<f64> {
    barta_core::extract_features(&coerce_text(text)).to_vec()
}

/// Extract feature vectors for a batch of messages, input order preserved.
#[pyfunction]
fn extract_features_batch(texts: Vec<Bound<'_, PyAny>>) -> Vec<Vec<f64>> {
    texts
        .iter()
        .map(|text| barta_core::extract_features(&coerce_text(text)).to_vec())
        .collect()
}

/// URL flags for one message.
///
/// Returns a dict with `has_url`, `has_short_url` and `has_regular_url`
/// as 0/1 ints.
#[pyfunction]
fn classify_urls<'py>(py: Python<'py>, text: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyDict>> {
    let features = barta_core::urls::classify(&coerce_text(text));
    let dict = PyDict::new_bound(py);
    dict.set_item("has_url", features.has_url as i32)?;
    dict.set_item("has_short_url", features.has_short_url as i32)?;
    dict.set_item("has_regular_url", features.has_regular_url as i32)?;
    Ok(dict)
}

/// The published feature schema, in vector order.
#[pyfunction]
fn feature_columns() -> Vec<&'static str> {
    barta_core::FEATURE_COLUMNS.to_vec()
}

/// Barta Rust core — native feature extraction for SMS spam classification.
#[pymodule]
fn barta_rust_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(extract_features, m)?)?;
    m.add_function(wrap_pyfunction!(extract_features_batch, m)?)?;
    m.add_function(wrap_pyfunction!(classify_urls, m)?)?;
    m.add_function(wrap_pyfunction!(feature_columns, m)?)?;
    Ok(())
}
