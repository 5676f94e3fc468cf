/// IWL numerical constants and calculator contract.
///
/// Centralises every fixed value of the estimation heuristic. The band and
/// risk-factor tables live next to their types (`bands`, `params`).

// -- Body surface area --

/// Divisor in the Mosteller formula: BSA = sqrt(height_cm * weight_kg / 3600).
pub const MOSTELLER_DIVISOR: f64 = 3600.0;

// -- Base rates --

/// Lower BSA-based insensible loss rate [mL/m²/day].
pub const BSA_RATE_LOW: f64 = 400.0;

/// Upper BSA-based insensible loss rate [mL/m²/day].
pub const BSA_RATE_HIGH: f64 = 500.0;

/// Lower weight-based insensible loss rate [mL/kg/day].
pub const WEIGHT_RATE_LOW: f64 = 15.0;

/// Upper weight-based insensible loss rate [mL/kg/day].
pub const WEIGHT_RATE_HIGH: f64 = 20.0;

// -- Adjustments --

/// Temperature at and below which no fever adjustment applies [C].
pub const NORMAL_TEMPERATURE_C: f64 = 37.0;

/// Fractional increase per degree above normal temperature [-/C].
pub const FEVER_FRACTION_PER_DEGREE: f64 = 0.13;

/// Extra loss per breath/min above the band maximum, per kg [mL/day].
pub const TACHYPNEA_ML_PER_BREATH_PER_KG: f64 = 2.0;

// -- Presentation --

/// Hours per day, for the hourly rate.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Divisor turning mL/kg/day into percent of body weight per day.
pub const PERCENT_BODY_WEIGHT_DIVISOR: f64 = 10.0;

// -- Input contract --

/// Measurement names in `PatientInput::from_array` order.
pub const MEASUREMENT_NAMES: &[&str] = &[
    "height_cm",
    "weight_kg",
    "temperature_c",
    "respiratory_rate",
];

/// Number of positional measurements.
pub const N_MEASUREMENTS: usize = 4;
