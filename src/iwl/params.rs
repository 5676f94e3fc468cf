/// Patient measurements and risk-factor flags for one calculation.
///
/// - `height_cm`: Height [cm], required
/// - `weight_kg`: Weight [kg], required
/// - `temperature_c`: Core temperature [C], defaults to 37.0
/// - `respiratory_rate`: Measured rate [breaths/min], 0 or absent = not assessed
/// - `risk_factors`: Environmental/clinical factors that raise insensible loss
///
/// A NaN measurement is treated exactly like an absent one, so values parsed
/// from a blank form field behave the same as values never supplied.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{MEASUREMENT_NAMES, NORMAL_TEMPERATURE_C, N_MEASUREMENTS};
use crate::error::IwlError;

/// A condition that increases insensible water loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Phototherapy,
    RadiantWarmer,
    LowHumidity,
    Burns,
}

/// Extra loss per factor, as a fraction of the low BSA base estimate.
pub const RISK_FACTOR_FRACTIONS: &[(RiskFactor, f64)] = &[
    (RiskFactor::Phototherapy, 0.20),
    (RiskFactor::RadiantWarmer, 0.30),
    (RiskFactor::LowHumidity, 0.25),
    (RiskFactor::Burns, 0.50),
];

impl RiskFactor {
    /// Every factor, in bit order.
    pub const ALL: [RiskFactor; 4] = [
        RiskFactor::Phototherapy,
        RiskFactor::RadiantWarmer,
        RiskFactor::LowHumidity,
        RiskFactor::Burns,
    ];

    /// Fraction of the low base estimate this factor adds.
    pub fn fraction(self) -> f64 {
        RISK_FACTOR_FRACTIONS
            .iter()
            .find(|(factor, _)| *factor == self)
            .map_or(0.0, |&(_, fraction)| fraction)
    }

    /// snake_case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            RiskFactor::Phototherapy => "phototherapy",
            RiskFactor::RadiantWarmer => "radiant_warmer",
            RiskFactor::LowHumidity => "low_humidity",
            RiskFactor::Burns => "burns",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskFactor {
    type Err = IwlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        RiskFactor::ALL
            .into_iter()
            .find(|factor| factor.name() == normalized)
            .ok_or_else(|| IwlError::UnknownRiskFactor(s.to_string()))
    }
}

/// Set of risk factors, stored as a bitmask. Flags are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<RiskFactor>", into = "Vec<RiskFactor>")]
pub struct RiskFactors(u8);

impl RiskFactors {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, factor: RiskFactor) {
        self.0 |= factor.bit();
    }

    pub fn remove(&mut self, factor: RiskFactor) {
        self.0 &= !factor.bit();
    }

    /// Flip one flag, as a checkbox does.
    pub fn toggle(&mut self, factor: RiskFactor) {
        self.0 ^= factor.bit();
    }

    pub fn contains(&self, factor: RiskFactor) -> bool {
        self.0 & factor.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected factors, in `RiskFactor::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = RiskFactor> + '_ {
        RiskFactor::ALL
            .into_iter()
            .filter(move |factor| self.contains(*factor))
    }

    /// Parse a list of factor names, as sent by a form or script.
    pub fn parse_names<S: AsRef<str>>(names: &[S]) -> Result<Self, IwlError> {
        names.iter().map(|name| name.as_ref().parse::<RiskFactor>()).collect()
    }

    /// Sum of the selected factors' fractions. No caps or interactions.
    pub fn total_fraction(&self) -> f64 {
        self.iter().map(RiskFactor::fraction).sum()
    }
}

impl FromIterator<RiskFactor> for RiskFactors {
    fn from_iter<I: IntoIterator<Item = RiskFactor>>(iter: I) -> Self {
        let mut set = RiskFactors::empty();
        for factor in iter {
            set.insert(factor);
        }
        set
    }
}

impl From<Vec<RiskFactor>> for RiskFactors {
    fn from(factors: Vec<RiskFactor>) -> Self {
        factors.into_iter().collect()
    }
}

impl From<RiskFactors> for Vec<RiskFactor> {
    fn from(set: RiskFactors) -> Self {
        set.iter().collect()
    }
}

/// Caller-supplied inputs for one calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub temperature_c: Option<f64>,
    pub respiratory_rate: Option<f64>,
    #[serde(default)]
    pub risk_factors: RiskFactors,
}

impl PatientInput {
    /// Input with height and weight set and every other field at its default.
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            ..Self::default()
        }
    }

    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self
    }

    pub fn with_respiratory_rate(mut self, respiratory_rate: f64) -> Self {
        self.respiratory_rate = Some(respiratory_rate);
        self
    }

    pub fn with_risk_factor(mut self, factor: RiskFactor) -> Self {
        self.risk_factors.insert(factor);
        self
    }

    pub fn with_risk_factors(mut self, factors: RiskFactors) -> Self {
        self.risk_factors = factors;
        self
    }

    /// Build from `[height_cm, weight_kg, temperature_c, respiratory_rate]`.
    /// NaN entries mean "not entered". Risk factors start empty.
    pub fn from_array(arr: &[f64]) -> Result<Self, IwlError> {
        if arr.len() != N_MEASUREMENTS {
            return Err(IwlError::WrongLength {
                expected: N_MEASUREMENTS,
                got: arr.len(),
            });
        }
        Ok(Self {
            height_cm: entered(arr[0]),
            weight_kg: entered(arr[1]),
            temperature_c: entered(arr[2]),
            respiratory_rate: entered(arr[3]),
            risk_factors: RiskFactors::empty(),
        })
    }

    /// Positional form of the measurements; absent values become NaN.
    pub fn to_array(&self) -> [f64; N_MEASUREMENTS] {
        [
            self.height_cm.unwrap_or(f64::NAN),
            self.weight_kg.unwrap_or(f64::NAN),
            self.temperature_c.unwrap_or(f64::NAN),
            self.respiratory_rate.unwrap_or(f64::NAN),
        ]
    }

    /// Height and weight, if both were entered.
    pub fn measurements(&self) -> Option<(f64, f64)> {
        let height = self.height_cm.and_then(entered)?;
        let weight = self.weight_kg.and_then(entered)?;
        Some((height, weight))
    }

    /// Temperature, defaulting to normal when not entered.
    pub fn temperature(&self) -> f64 {
        self.temperature_c
            .and_then(entered)
            .unwrap_or(NORMAL_TEMPERATURE_C)
    }

    /// Respiratory rate, 0 when not assessed.
    pub fn respiratory_rate(&self) -> f64 {
        self.respiratory_rate.and_then(entered).unwrap_or(0.0)
    }

    /// Strict checks used by `compute_checked`. Returns (height, weight).
    pub fn validate(&self) -> Result<(f64, f64), IwlError> {
        let height = required(self.height_cm, MEASUREMENT_NAMES[0])?;
        let weight = required(self.weight_kg, MEASUREMENT_NAMES[1])?;
        positive(height, MEASUREMENT_NAMES[0])?;
        positive(weight, MEASUREMENT_NAMES[1])?;

        if let Some(temp) = self.temperature_c.and_then(entered) {
            finite(temp, MEASUREMENT_NAMES[2])?;
        }
        if let Some(rate) = self.respiratory_rate.and_then(entered) {
            finite(rate, MEASUREMENT_NAMES[3])?;
            if rate < 0.0 {
                return Err(IwlError::NonPositive {
                    field: MEASUREMENT_NAMES[3],
                    value: rate,
                });
            }
        }
        Ok((height, weight))
    }
}

fn entered(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, IwlError> {
    let value = value
        .and_then(entered)
        .ok_or(IwlError::MissingMeasurement { field })?;
    finite(value, field)?;
    Ok(value)
}

fn finite(value: f64, field: &'static str) -> Result<(), IwlError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IwlError::NonFinite { field, value })
    }
}

fn positive(value: f64, field: &'static str) -> Result<(), IwlError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(IwlError::NonPositive { field, value })
    }
}
