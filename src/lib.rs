/// iwl-calc — pediatric insensible water loss calculator.
///
/// A pure, deterministic estimate of insensible water loss from height,
/// weight, temperature, respiratory rate and risk-factor flags. Callable
/// from the `iwl` CLI, the batch cohort API, or Python (feature `python`).
pub mod cohort;
pub mod error;
pub mod iwl;

pub use cohort::Cohort;
pub use error::IwlError;
pub use iwl::bands::NormalRespiratoryRateBand;
pub use iwl::outputs::{IwlRange, IwlResult, IwlSummary, IwlSummaryColumns};
pub use iwl::params::{PatientInput, RiskFactor, RiskFactors};
pub use iwl::run::{compute, compute_checked, run_cohort};

#[cfg(feature = "python")]
mod pyo3_bindings;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_bindings::register(m)?;
    Ok(())
}
