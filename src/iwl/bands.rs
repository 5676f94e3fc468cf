/// Age-appropriate normal respiratory rate bands, selected by weight.
///
/// The table is an ordered list of `(upper weight bound, band)` pairs, upper
/// bound exclusive, evaluated first-match. Weights at or above the last bound
/// fall through to `FALLBACK_BAND`, so every weight maps to exactly one band.
use serde::Serialize;

/// Normal breathing range for an age group [breaths/min].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalRespiratoryRateBand {
    pub min_rate: f64,
    pub max_rate: f64,
    pub age_label: &'static str,
}

impl NormalRespiratoryRateBand {
    const fn new(min_rate: f64, max_rate: f64, age_label: &'static str) -> Self {
        Self {
            min_rate,
            max_rate,
            age_label,
        }
    }

    /// Breaths/min above the band maximum, 0 when within or below the band.
    pub fn excess(&self, rate: f64) -> f64 {
        if rate > self.max_rate {
            rate - self.max_rate
        } else {
            0.0
        }
    }
}

/// Weight-ordered bands: (weight upper bound exclusive [kg], band).
pub const RR_BANDS: &[(f64, NormalRespiratoryRateBand)] = &[
    (3.0, NormalRespiratoryRateBand::new(30.0, 60.0, "Newborn")),
    (5.0, NormalRespiratoryRateBand::new(30.0, 50.0, "0–3 months")),
    (8.0, NormalRespiratoryRateBand::new(25.0, 40.0, "3–6 months")),
    (12.0, NormalRespiratoryRateBand::new(20.0, 35.0, "6–12 months")),
    (20.0, NormalRespiratoryRateBand::new(20.0, 30.0, "1–3 years")),
];

/// Band for weights at or above the last table bound.
pub const FALLBACK_BAND: NormalRespiratoryRateBand =
    NormalRespiratoryRateBand::new(15.0, 25.0, "3+ years");

/// Select the normal band for a weight. First match wins.
pub fn lookup(weight_kg: f64) -> NormalRespiratoryRateBand {
    let band = RR_BANDS
        .iter()
        .find(|(upper, _)| weight_kg < *upper)
        .map_or(FALLBACK_BAND, |&(_, band)| band);
    tracing::trace!(weight_kg, label = band.age_label, "selected respiratory band");
    band
}
