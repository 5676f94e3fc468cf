/// IWL calculator orchestration.
///
/// - `compute()`: one patient → `Option<IwlResult>`, withheld without height/weight
/// - `compute_checked()`: same formula behind strict input validation
/// - `run_cohort()`: every row of a `Cohort` → `IwlSummaryColumns`
use super::bands;
use super::outputs::{IwlResult, IwlSummaryColumns};
use super::params::PatientInput;
use super::processes;
use crate::cohort::Cohort;
use crate::error::IwlError;

/// Estimate insensible water loss for one patient.
///
/// Returns `None` when height or weight was not entered; the caller shows
/// its placeholder state. No range checks: zero or negative measurements
/// yield degenerate numbers rather than an error.
pub fn compute(input: &PatientInput) -> Option<IwlResult> {
    let Some((height_cm, weight_kg)) = input.measurements() else {
        tracing::debug!("height or weight not entered, result withheld");
        return None;
    };
    Some(estimate(height_cm, weight_kg, input))
}

/// Like `compute`, but rejects missing, infinite or out-of-range
/// measurements with an `IwlError`.
pub fn compute_checked(input: &PatientInput) -> Result<IwlResult, IwlError> {
    let (height_cm, weight_kg) = input.validate()?;
    Ok(estimate(height_cm, weight_kg, input))
}

fn estimate(height_cm: f64, weight_kg: f64, input: &PatientInput) -> IwlResult {
    // Step 1: Body surface area
    let bsa = processes::body_surface_area(height_cm, weight_kg);

    // Steps 2-3: BSA base range and the weight-based alternative
    let base_iwl = processes::base_iwl(bsa);
    let weight_based_iwl = processes::weight_based_iwl(weight_kg);

    // Step 4: Normal breathing band for this weight
    let applied_rr_band = bands::lookup(weight_kg);

    // Step 5: Fever
    let fever_adjustment_fraction = processes::fever_fraction(input.temperature());

    // Step 6: Tachypnea
    let respiratory_adjustment_ml = processes::respiratory_adjustment(
        input.respiratory_rate(),
        &applied_rr_band,
        weight_kg,
    );

    // Step 7: Risk factors, on the pre-fever low bound
    let risk_factor_adjustment_ml =
        processes::risk_factor_adjustment(&input.risk_factors, base_iwl.low);

    // Steps 8-9: Final daily and hourly ranges
    let adjusted_iwl = processes::adjusted_iwl(
        base_iwl,
        fever_adjustment_fraction,
        respiratory_adjustment_ml + risk_factor_adjustment_ml,
    );
    let hourly_rate = processes::hourly_rate(adjusted_iwl);

    IwlResult {
        weight_kg,
        bsa,
        base_iwl,
        weight_based_iwl,
        fever_adjustment_fraction,
        respiratory_adjustment_ml,
        risk_factor_adjustment_ml,
        adjusted_iwl,
        hourly_rate,
        applied_rr_band,
    }
}

/// Evaluate every patient of a cohort.
///
/// Withheld rows are all-NaN, so each column has exactly `cohort.len()` rows.
pub fn run_cohort(cohort: &Cohort) -> IwlSummaryColumns {
    let n = cohort.len();
    let mut outputs = IwlSummaryColumns::with_capacity(n);

    for i in 0..n {
        match cohort.get(i).as_ref().and_then(compute) {
            Some(result) => outputs.push(&result.summary()),
            None => outputs.push_withheld(),
        }
    }

    tracing::debug!(
        rows = n,
        withheld = outputs.withheld_count(),
        "cohort evaluated"
    );
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iwl::params::{RiskFactor, RiskFactors};
    use approx::assert_relative_eq;

    fn infant() -> PatientInput {
        PatientInput::new(77.0, 8.5)
    }

    // -- compute() --

    #[test]
    fn withheld_without_height_or_weight() {
        assert!(compute(&PatientInput::default()).is_none());

        let no_weight = PatientInput {
            height_cm: Some(77.0),
            temperature_c: Some(39.0),
            respiratory_rate: Some(60.0),
            ..PatientInput::default()
        };
        assert!(compute(&no_weight).is_none());

        let nan_height = PatientInput::new(f64::NAN, 8.5);
        assert!(compute(&nan_height).is_none());
    }

    #[test]
    fn baseline_adjusted_equals_base() {
        let r = compute(&infant()).unwrap();
        assert_eq!(r.adjusted_iwl, r.base_iwl);
        assert_eq!(r.fever_multiplier(), 1.0);
        assert_eq!(r.respiratory_adjustment_ml, 0.0);
        assert_eq!(r.risk_factor_adjustment_ml, 0.0);
    }

    #[test]
    fn returns_finite_values() {
        let input = infant()
            .with_temperature(38.4)
            .with_respiratory_rate(52.0)
            .with_risk_factor(RiskFactor::RadiantWarmer);
        let r = compute(&input).unwrap();
        assert!(r.bsa.is_finite());
        assert!(r.adjusted_iwl.low.is_finite());
        assert!(r.hourly_rate.high.is_finite());
    }

    #[test]
    fn fever_not_applied_to_weight_based_range() {
        let cool = compute(&infant()).unwrap();
        let hot = compute(&infant().with_temperature(40.0)).unwrap();
        assert_eq!(cool.weight_based_iwl, hot.weight_based_iwl);
        assert!(hot.adjusted_iwl.low > cool.adjusted_iwl.low);
    }

    #[test]
    fn risk_factors_use_pre_fever_base() {
        let flags: RiskFactors = [RiskFactor::LowHumidity].into_iter().collect();
        let r = compute(&infant().with_temperature(39.0).with_risk_factors(flags)).unwrap();
        assert_relative_eq!(
            r.risk_factor_adjustment_ml,
            0.25 * r.base_iwl.low,
            epsilon = 1e-12
        );
    }

    #[test]
    fn both_bounds_get_same_additive_adjustment() {
        let plain = compute(&infant()).unwrap();
        let input = infant()
            .with_respiratory_rate(50.0)
            .with_risk_factor(RiskFactor::Burns);
        let r = compute(&input).unwrap();
        let added = r.respiratory_adjustment_ml + r.risk_factor_adjustment_ml;
        assert_relative_eq!(r.adjusted_iwl.low - plain.adjusted_iwl.low, added, epsilon = 1e-9);
        assert_relative_eq!(r.adjusted_iwl.high - plain.adjusted_iwl.high, added, epsilon = 1e-9);
    }

    #[test]
    fn hourly_is_exactly_daily_over_24() {
        let r = compute(&infant().with_temperature(38.2).with_respiratory_rate(47.0)).unwrap();
        assert_eq!(r.hourly_rate.low, r.adjusted_iwl.low / 24.0);
        assert_eq!(r.hourly_rate.high, r.adjusted_iwl.high / 24.0);
    }

    #[test]
    fn degenerate_weight_propagates() {
        let r = compute(&PatientInput::new(77.0, 0.0)).unwrap();
        assert_eq!(r.bsa, 0.0);
        assert_eq!(r.adjusted_iwl.low, 0.0);

        let r = compute(&PatientInput::new(77.0, -2.0)).unwrap();
        assert!(r.bsa.is_nan());
    }

    #[test]
    fn does_not_mutate_input() {
        let input = infant().with_risk_factor(RiskFactor::Phototherapy);
        let copy = input;
        let _ = compute(&input);
        assert_eq!(input, copy);
    }

    // -- compute_checked() --

    #[test]
    fn checked_matches_compute_for_valid_input() {
        let input = infant().with_temperature(38.0).with_respiratory_rate(44.0);
        assert_eq!(compute_checked(&input).unwrap(), compute(&input).unwrap());
    }

    #[test]
    fn checked_rejects_degenerate_inputs() {
        assert!(matches!(
            compute_checked(&PatientInput::new(77.0, 0.0)),
            Err(IwlError::NonPositive { .. })
        ));
        assert!(matches!(
            compute_checked(&PatientInput::default()),
            Err(IwlError::MissingMeasurement { field: "height_cm" })
        ));
    }

    // -- run_cohort() --

    #[test]
    fn cohort_rows_match_single_compute() {
        let cohort = Cohort::new(
            vec![77.0, f64::NAN, 110.0],
            vec![8.5, 12.0, 19.0],
            vec![37.0, 37.0, 39.5],
            vec![f64::NAN, 30.0, 42.0],
            vec![
                RiskFactors::empty(),
                RiskFactors::empty(),
                [RiskFactor::Burns].into_iter().collect(),
            ],
        )
        .unwrap();

        let cols = run_cohort(&cohort);
        assert_eq!(cols.len(), 3);

        let first = compute(&infant()).unwrap().summary();
        assert_eq!(cols.row(0).unwrap(), first);

        assert!(cols.row(1).unwrap().is_withheld());

        let third = compute(&cohort.get(2).unwrap()).unwrap();
        assert_relative_eq!(cols.adjusted_high[2], third.adjusted_iwl.high);
        assert_eq!(cols.rr_band_max[2], 30.0);
    }
}
