/// Validated column data for batch IWL evaluation.
///
/// One entry per patient in each column. All columns must have the same
/// non-zero length. NaN marks a measurement that was not entered, exactly
/// as for a single `PatientInput`.
use crate::error::IwlError;
use crate::iwl::params::{PatientInput, RiskFactors};

#[derive(Debug, Clone)]
pub struct Cohort {
    heights_cm: Vec<f64>,
    weights_kg: Vec<f64>,
    temperatures_c: Vec<f64>,
    respiratory_rates: Vec<f64>,
    risk_factors: Vec<RiskFactors>,
}

impl Cohort {
    /// Create a new Cohort with validation.
    ///
    /// Validates:
    /// - heights are non-empty
    /// - every other column has as many rows as heights
    pub fn new(
        heights_cm: Vec<f64>,
        weights_kg: Vec<f64>,
        temperatures_c: Vec<f64>,
        respiratory_rates: Vec<f64>,
        risk_factors: Vec<RiskFactors>,
    ) -> Result<Self, IwlError> {
        let expected = heights_cm.len();
        if expected == 0 {
            return Err(IwlError::EmptyCohort);
        }
        let lengths = [
            ("weights_kg", weights_kg.len()),
            ("temperatures_c", temperatures_c.len()),
            ("respiratory_rates", respiratory_rates.len()),
            ("risk_factors", risk_factors.len()),
        ];
        for (column, got) in lengths {
            if got != expected {
                return Err(IwlError::LengthMismatch {
                    column,
                    expected,
                    got,
                });
            }
        }
        Ok(Self {
            heights_cm,
            weights_kg,
            temperatures_c,
            respiratory_rates,
            risk_factors,
        })
    }

    /// Cohort from height and weight only: normal temperature, breathing
    /// not assessed, no risk factors.
    pub fn from_measurements(heights_cm: Vec<f64>, weights_kg: Vec<f64>) -> Result<Self, IwlError> {
        let n = heights_cm.len();
        Self::new(
            heights_cm,
            weights_kg,
            vec![f64::NAN; n],
            vec![f64::NAN; n],
            vec![RiskFactors::empty(); n],
        )
    }

    /// Number of patients.
    pub fn len(&self) -> usize {
        self.heights_cm.len()
    }

    /// Returns `true` if there are no patients.
    pub fn is_empty(&self) -> bool {
        self.heights_cm.is_empty()
    }

    pub fn heights_cm(&self) -> &[f64] {
        &self.heights_cm
    }

    pub fn weights_kg(&self) -> &[f64] {
        &self.weights_kg
    }

    pub fn temperatures_c(&self) -> &[f64] {
        &self.temperatures_c
    }

    pub fn respiratory_rates(&self) -> &[f64] {
        &self.respiratory_rates
    }

    pub fn risk_factors(&self) -> &[RiskFactors] {
        &self.risk_factors
    }

    /// Patient `i` as a single input, or `None` if out of range.
    pub fn get(&self, i: usize) -> Option<PatientInput> {
        let mut input = PatientInput::from_array(&[
            *self.heights_cm.get(i)?,
            *self.weights_kg.get(i)?,
            *self.temperatures_c.get(i)?,
            *self.respiratory_rates.get(i)?,
        ])
        .ok()?;
        input.risk_factors = *self.risk_factors.get(i)?;
        Some(input)
    }

    /// Every patient, in row order.
    pub fn iter(&self) -> impl Iterator<Item = PatientInput> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}
