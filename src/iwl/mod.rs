/// IWL — pediatric insensible water loss estimate.
///
/// BSA-based range (400-500 mL/m²/day) with a fever multiplier and additive
/// tachypnea and risk-factor adjustments, plus a weight-based alternative
/// range and the weight-banded normal respiratory rate it depends on.
pub mod bands;
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;
