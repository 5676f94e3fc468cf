/// IWL process functions.
///
/// Pure functions for each step of the estimate. All inputs and outputs are
/// f64 and none of them validate ranges: degenerate inputs (zero or negative
/// measurements) propagate as degenerate numbers.
use super::bands::NormalRespiratoryRateBand;
use super::constants::{
    BSA_RATE_HIGH, BSA_RATE_LOW, FEVER_FRACTION_PER_DEGREE, HOURS_PER_DAY, MOSTELLER_DIVISOR,
    NORMAL_TEMPERATURE_C, PERCENT_BODY_WEIGHT_DIVISOR, TACHYPNEA_ML_PER_BREATH_PER_KG,
    WEIGHT_RATE_HIGH, WEIGHT_RATE_LOW,
};
use super::outputs::IwlRange;
use super::params::RiskFactors;

/// Step 1: Body surface area by the Mosteller formula [m²].
pub fn body_surface_area(height_cm: f64, weight_kg: f64) -> f64 {
    (height_cm * weight_kg / MOSTELLER_DIVISOR).sqrt()
}

/// Step 2: BSA-based insensible loss [mL/day].
pub fn base_iwl(bsa: f64) -> IwlRange {
    IwlRange::new(bsa * BSA_RATE_LOW, bsa * BSA_RATE_HIGH)
}

/// Step 3: Weight-based alternative estimate [mL/day]. Informational only.
pub fn weight_based_iwl(weight_kg: f64) -> IwlRange {
    IwlRange::new(weight_kg * WEIGHT_RATE_LOW, weight_kg * WEIGHT_RATE_HIGH)
}

/// Step 5: Fractional increase for fever, 0 at or below normal temperature.
pub fn fever_fraction(temperature_c: f64) -> f64 {
    if temperature_c > NORMAL_TEMPERATURE_C {
        (temperature_c - NORMAL_TEMPERATURE_C) * FEVER_FRACTION_PER_DEGREE
    } else {
        0.0
    }
}

/// Step 6: Additive tachypnea loss [mL/day].
///
/// Only rates above the band maximum count; slow breathing earns no
/// negative adjustment.
pub fn respiratory_adjustment(
    respiratory_rate: f64,
    band: &NormalRespiratoryRateBand,
    weight_kg: f64,
) -> f64 {
    band.excess(respiratory_rate) * TACHYPNEA_ML_PER_BREATH_PER_KG * weight_kg
}

/// Step 7: Additive risk-factor loss [mL/day], relative to the pre-fever
/// low base estimate.
pub fn risk_factor_adjustment(risk_factors: &RiskFactors, base_low: f64) -> f64 {
    risk_factors.total_fraction() * base_low
}

/// Step 8: Final range. Both bounds get the same additive adjustments.
pub fn adjusted_iwl(base: IwlRange, fever_fraction: f64, additive_ml: f64) -> IwlRange {
    base.scale(1.0 + fever_fraction).offset(additive_ml)
}

/// Step 9: Daily volume to hourly rate [mL/hour].
pub fn hourly_rate(daily: IwlRange) -> IwlRange {
    daily.divide(HOURS_PER_DAY)
}

/// Daily loss as percent of body weight per day.
pub fn percent_body_weight(daily: IwlRange, weight_kg: f64) -> IwlRange {
    daily.divide(weight_kg).divide(PERCENT_BODY_WEIGHT_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iwl::bands;
    use crate::iwl::params::RiskFactor;

    /// Helper: assert two f64 values are close.
    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    // -- Step 1: BSA --

    #[test]
    fn bsa_mosteller() {
        assert_approx(body_surface_area(77.0, 8.5), 0.426387, 1e-6);
        assert_approx(body_surface_area(180.0, 80.0), 2.0, 1e-12);
    }

    #[test]
    fn bsa_degenerate_inputs() {
        assert_eq!(body_surface_area(77.0, 0.0), 0.0);
        assert!(body_surface_area(-77.0, 8.5).is_nan());
    }

    // -- Steps 2-3: ranges --

    #[test]
    fn base_ratio_is_five_quarters() {
        let r = base_iwl(0.4273);
        assert_approx(r.high, r.low * 1.25, 1e-12);
    }

    #[test]
    fn weight_based_ratio() {
        let r = weight_based_iwl(8.5);
        assert_approx(r.low, 127.5, 1e-12);
        assert_approx(r.high, 170.0, 1e-12);
        assert_approx(r.high, r.low * 20.0 / 15.0, 1e-12);
    }

    // -- Step 5: fever --

    #[test]
    fn no_fever_at_or_below_normal() {
        assert_eq!(fever_fraction(37.0), 0.0);
        assert_eq!(fever_fraction(36.2), 0.0);
    }

    #[test]
    fn fever_increases_strictly() {
        assert_approx(fever_fraction(39.0), 0.26, 1e-12);
        let mut prev = fever_fraction(37.0);
        for tenth in 1..50 {
            let f = fever_fraction(37.0 + tenth as f64 * 0.1);
            assert!(f > prev);
            prev = f;
        }
    }

    // -- Step 6: tachypnea --

    #[test]
    fn respiratory_zero_within_band() {
        let band = bands::lookup(6.0);
        assert_eq!(respiratory_adjustment(0.0, &band, 6.0), 0.0);
        assert_eq!(respiratory_adjustment(40.0, &band, 6.0), 0.0);
    }

    #[test]
    fn respiratory_no_negative_for_slow_rates() {
        let band = bands::lookup(3.0);
        assert_eq!(respiratory_adjustment(10.0, &band, 3.0), 0.0);
    }

    #[test]
    fn respiratory_linear_above_band() {
        let band = bands::lookup(6.0);
        let one = respiratory_adjustment(41.0, &band, 6.0);
        let ten = respiratory_adjustment(50.0, &band, 6.0);
        assert_approx(one, 12.0, 1e-12);
        assert_approx(ten, 10.0 * one, 1e-12);
    }

    // -- Step 7: risk factors --

    #[test]
    fn risk_factors_relative_to_base_low() {
        let set: RiskFactors = [RiskFactor::Phototherapy, RiskFactor::Burns]
            .into_iter()
            .collect();
        assert_approx(risk_factor_adjustment(&set, 171.0), 119.7, 1e-9);
        assert_eq!(risk_factor_adjustment(&RiskFactors::empty(), 171.0), 0.0);
    }

    // -- Steps 8-9 --

    #[test]
    fn adjusted_applies_multiplier_then_offset() {
        let r = adjusted_iwl(IwlRange::new(100.0, 125.0), 0.26, 10.0);
        assert_approx(r.low, 136.0, 1e-12);
        assert_approx(r.high, 167.5, 1e-12);
    }

    #[test]
    fn hourly_is_daily_over_24() {
        let daily = IwlRange::new(240.0, 300.0);
        let hourly = hourly_rate(daily);
        assert_eq!(hourly.low, 10.0);
        assert_eq!(hourly.high, 12.5);

        let daily = IwlRange::new(170.9, 213.6);
        let hourly = hourly_rate(daily);
        assert_eq!(hourly.low, 170.9 / 24.0);
        assert_eq!(hourly.high, 213.6 / 24.0);
    }

    #[test]
    fn percent_of_body_weight() {
        let pct = percent_body_weight(IwlRange::new(170.0, 212.5), 8.5);
        assert_approx(pct.low, 2.0, 1e-12);
        assert_approx(pct.high, 2.5, 1e-12);
    }
}
