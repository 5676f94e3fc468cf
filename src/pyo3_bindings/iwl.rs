use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyAttributeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::cohort::Cohort;
use crate::iwl::bands;
use crate::iwl::outputs::IwlSummary;
use crate::iwl::params::{PatientInput, RiskFactors};
use crate::iwl::run;

use super::convert::{column_or_missing, contiguous_slice, value_error};

/// Single-patient result. Every `IwlSummary` column is a read-only attribute.
#[pyclass(frozen)]
pub struct IWLResult {
    row: IwlSummary,
}

#[pymethods]
impl IWLResult {
    fn __getattr__(&self, name: &str) -> PyResult<f64> {
        self.row
            .value(name)
            .ok_or_else(|| PyAttributeError::new_err(format!("IWLResult has no attribute '{name}'")))
    }

    fn __dir__(&self) -> Vec<&'static str> {
        IwlSummary::field_names().to_vec()
    }

    fn __repr__(&self) -> String {
        format!(
            "IWLResult(adjusted={:.0}-{:.0} mL/day, hourly={:.1}-{:.1} mL/h)",
            self.row.adjusted_low, self.row.adjusted_high, self.row.hourly_low, self.row.hourly_high
        )
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        for &name in IwlSummary::field_names() {
            dict.set_item(name, self.row.value(name))?;
        }
        Ok(dict)
    }
}

#[pyfunction]
#[pyo3(signature = (
    height_cm=None,
    weight_kg=None,
    temperature_c=None,
    respiratory_rate=None,
    risk_factors=Vec::new()
))]
fn iwl_compute(
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    temperature_c: Option<f64>,
    respiratory_rate: Option<f64>,
    risk_factors: Vec<String>,
) -> PyResult<Option<IWLResult>> {
    let input = PatientInput {
        height_cm,
        weight_kg,
        temperature_c,
        respiratory_rate,
        risk_factors: RiskFactors::parse_names(&risk_factors).map_err(value_error)?,
    };

    Ok(run::compute(&input).map(|result| IWLResult {
        row: result.summary(),
    }))
}

#[pyfunction]
#[pyo3(signature = (heights_cm, weights_kg, temperatures_c=None, respiratory_rates=None, risk_factors=None))]
fn iwl_compute_batch<'py>(
    py: Python<'py>,
    heights_cm: PyReadonlyArray1<'py, f64>,
    weights_kg: PyReadonlyArray1<'py, f64>,
    temperatures_c: Option<PyReadonlyArray1<'py, f64>>,
    respiratory_rates: Option<PyReadonlyArray1<'py, f64>>,
    risk_factors: Option<Vec<Vec<String>>>,
) -> PyResult<Bound<'py, PyDict>> {
    let heights = contiguous_slice(&heights_cm)?.to_vec();
    let weights = contiguous_slice(&weights_kg)?.to_vec();
    let n = heights.len();

    let temps = column_or_missing(temperatures_c.as_ref(), n, "temperatures_c")?;
    let rates = column_or_missing(respiratory_rates.as_ref(), n, "respiratory_rates")?;
    let flags = match risk_factors {
        Some(rows) => rows
            .iter()
            .map(|names| RiskFactors::parse_names(names))
            .collect::<Result<Vec<RiskFactors>, _>>()
            .map_err(value_error)?,
        None => vec![RiskFactors::empty(); n],
    };

    let cohort = Cohort::new(heights, weights, temps, rates, flags).map_err(value_error)?;
    let result = run::run_cohort(&cohort);

    let dict = PyDict::new(py);
    for (name, column) in result.into_named_columns() {
        dict.set_item(name, PyArray1::from_vec(py, column))?;
    }
    Ok(dict)
}

#[pyfunction]
fn normal_rr_band(weight_kg: f64) -> (f64, f64, &'static str) {
    let band = bands::lookup(weight_kg);
    (band.min_rate, band.max_rate, band.age_label)
}

#[pyfunction]
fn field_names() -> Vec<&'static str> {
    IwlSummary::field_names().to_vec()
}

pub fn module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "iwl")?;
    m.add_function(wrap_pyfunction!(iwl_compute, &m)?)?;
    m.add_function(wrap_pyfunction!(iwl_compute_batch, &m)?)?;
    m.add_function(wrap_pyfunction!(normal_rr_band, &m)?)?;
    m.add_function(wrap_pyfunction!(field_names, &m)?)?;
    m.add_class::<IWLResult>()?;
    Ok(m)
}
