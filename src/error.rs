/// Error type for IWL calculations.
///
/// The plain `compute` path never fails: a missing height or weight withholds
/// the result instead. These errors come from the validated entry point
/// (`compute_checked`), cohort construction, and name/array parsing.
use thiserror::Error;

/// Errors raised by validated IWL operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IwlError {
    /// A required measurement (height or weight) was not entered.
    #[error("{field} is required")]
    MissingMeasurement { field: &'static str },

    /// A measurement is infinite.
    #[error("{field} = {value} is not a finite number")]
    NonFinite { field: &'static str, value: f64 },

    /// Height and weight must be > 0; respiratory rate must be >= 0.
    #[error("{field} = {value} is out of range")]
    NonPositive { field: &'static str, value: f64 },

    /// Cohort columns disagree in length.
    #[error("{column} has {got} rows, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        got: usize,
    },

    /// A cohort needs at least one row.
    #[error("cohort is empty")]
    EmptyCohort,

    /// Positional measurement array of the wrong size.
    #[error("expected {expected} measurements, got {got}")]
    WrongLength { expected: usize, got: usize },

    /// Risk factor name not recognised.
    #[error("unknown risk factor '{0}'")]
    UnknownRiskFactor(String),
}
