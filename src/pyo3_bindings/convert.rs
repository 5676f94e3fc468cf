use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::IwlError;

/// Map a calculator error onto `ValueError`.
pub fn value_error(err: IwlError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>) -> PyResult<&'a [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Copy an optional column, filling NaN ("not entered") when absent.
pub fn column_or_missing(
    arr: Option<&PyReadonlyArray1<'_, f64>>,
    expected_len: usize,
    name: &str,
) -> PyResult<Vec<f64>> {
    let Some(arr) = arr else {
        return Ok(vec![f64::NAN; expected_len]);
    };
    let slice = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err(format!("{name} must be C-contiguous")))?;
    if slice.len() != expected_len {
        return Err(PyValueError::new_err(format!(
            "{} must have {} elements, got {}",
            name,
            expected_len,
            slice.len()
        )));
    }
    Ok(slice.to_vec())
}
