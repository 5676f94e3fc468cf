/// IWL calculation outputs.
///
/// Two levels: `IwlResult` is the structured result of one calculation, and
/// `IwlSummary` is its flat all-f64 projection used as one row of batch
/// output (`IwlSummaryColumns`, generated by `#[derive(Columnar)]`).
use iwl_macros::Columnar;
use serde::Serialize;

use super::bands::NormalRespiratoryRateBand;
use super::processes;

/// A (low, high) pair of volumes or rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IwlRange {
    pub low: f64,
    pub high: f64,
}

impl IwlRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Multiply both bounds.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.low * factor, self.high * factor)
    }

    /// Add the same amount to both bounds.
    pub fn offset(self, amount: f64) -> Self {
        Self::new(self.low + amount, self.high + amount)
    }

    /// Divide both bounds.
    pub fn divide(self, divisor: f64) -> Self {
        Self::new(self.low / divisor, self.high / divisor)
    }
}

/// Result of one calculation. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IwlResult {
    /// Weight the estimate was computed for [kg].
    pub weight_kg: f64,
    /// Body surface area [m²].
    pub bsa: f64,
    /// BSA-based estimate [mL/day].
    pub base_iwl: IwlRange,
    /// Weight-based alternative estimate [mL/day]. Not folded into the final range.
    pub weight_based_iwl: IwlRange,
    pub fever_adjustment_fraction: f64,
    /// Tachypnea loss [mL/day].
    pub respiratory_adjustment_ml: f64,
    /// Risk-factor loss [mL/day].
    pub risk_factor_adjustment_ml: f64,
    /// Final estimate [mL/day].
    pub adjusted_iwl: IwlRange,
    /// Final estimate [mL/hour].
    pub hourly_rate: IwlRange,
    pub applied_rr_band: NormalRespiratoryRateBand,
}

impl IwlResult {
    /// Multiplier applied to the BSA base range.
    pub fn fever_multiplier(&self) -> f64 {
        1.0 + self.fever_adjustment_fraction
    }

    /// Final estimate as percent of body weight per day.
    pub fn percent_body_weight_per_day(&self) -> IwlRange {
        processes::percent_body_weight(self.adjusted_iwl, self.weight_kg)
    }

    /// Flat row form of this result.
    pub fn summary(&self) -> IwlSummary {
        let pct = self.percent_body_weight_per_day();
        IwlSummary {
            bsa: self.bsa,
            base_low: self.base_iwl.low,
            base_high: self.base_iwl.high,
            weight_based_low: self.weight_based_iwl.low,
            weight_based_high: self.weight_based_iwl.high,
            fever_fraction: self.fever_adjustment_fraction,
            respiratory_adjustment: self.respiratory_adjustment_ml,
            risk_factor_adjustment: self.risk_factor_adjustment_ml,
            adjusted_low: self.adjusted_iwl.low,
            adjusted_high: self.adjusted_iwl.high,
            hourly_low: self.hourly_rate.low,
            hourly_high: self.hourly_rate.high,
            percent_body_weight_low: pct.low,
            percent_body_weight_high: pct.high,
            rr_band_min: self.applied_rr_band.min_rate,
            rr_band_max: self.applied_rr_band.max_rate,
        }
    }
}

/// One batch row: every numeric output of a calculation. A withheld
/// patient is the all-NaN row (`IwlSummary::withheld()`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Columnar)]
pub struct IwlSummary {
    pub bsa: f64,
    pub base_low: f64,
    pub base_high: f64,
    pub weight_based_low: f64,
    pub weight_based_high: f64,
    pub fever_fraction: f64,
    pub respiratory_adjustment: f64,
    pub risk_factor_adjustment: f64,
    pub adjusted_low: f64,
    pub adjusted_high: f64,
    pub hourly_low: f64,
    pub hourly_high: f64,
    pub percent_body_weight_low: f64,
    pub percent_body_weight_high: f64,
    pub rr_band_min: f64,
    pub rr_band_max: f64,
}
