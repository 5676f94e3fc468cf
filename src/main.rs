use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use iwl_calc::{compute, compute_checked, IwlError, IwlResult, PatientInput, RiskFactor};

/// Estimate pediatric insensible water loss from bedside measurements.
#[derive(Debug, Parser)]
#[command(name = "iwl", version)]
struct Cli {
    /// Height [cm]
    #[arg(long)]
    height: Option<f64>,

    /// Weight [kg]
    #[arg(long)]
    weight: Option<f64>,

    /// Core temperature [C], 37.0 when omitted
    #[arg(long)]
    temperature: Option<f64>,

    /// Measured respiratory rate [breaths/min]
    #[arg(long)]
    respiratory_rate: Option<f64>,

    /// Risk factor: phototherapy, radiant_warmer, low_humidity, burns (repeatable)
    #[arg(long = "risk-factor")]
    risk_factors: Vec<RiskFactor>,

    /// Reject missing or out-of-range measurements instead of withholding
    #[arg(long)]
    strict: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn patient_input(&self) -> PatientInput {
        PatientInput {
            height_cm: self.height,
            weight_kg: self.weight,
            temperature_c: self.temperature,
            respiratory_rate: self.respiratory_rate,
            risk_factors: self.risk_factors.iter().copied().collect(),
        }
    }

    /// `None` is the placeholder state: height or weight not entered.
    fn evaluate(&self, input: &PatientInput) -> Result<Option<IwlResult>, IwlError> {
        if self.strict {
            compute_checked(input).map(Some)
        } else {
            Ok(compute(input))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = cli.patient_input();

    let Some(result) = cli.evaluate(&input)? else {
        println!("Enter height and weight to calculate insensible water loss.");
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&input, &result);
    }
    Ok(())
}

fn print_report(input: &PatientInput, r: &IwlResult) {
    let band = &r.applied_rr_band;
    println!("Body surface area        {:>8.4} m²", r.bsa);
    println!(
        "Base IWL (BSA)           {:>8.0} - {:<8.0} mL/day",
        r.base_iwl.low, r.base_iwl.high
    );
    println!(
        "Weight-based IWL         {:>8.0} - {:<8.0} mL/day",
        r.weight_based_iwl.low, r.weight_based_iwl.high
    );
    println!(
        "Normal RR ({:<11})    {:>8.0} - {:<8.0} breaths/min",
        band.age_label, band.min_rate, band.max_rate
    );
    println!(
        "Fever adjustment         {:>7.0}%",
        r.fever_adjustment_fraction * 100.0
    );
    println!("Respiratory adjustment   {:>8.0} mL/day", r.respiratory_adjustment_ml);
    println!("Risk-factor adjustment   {:>8.0} mL/day", r.risk_factor_adjustment_ml);
    if !input.risk_factors.is_empty() {
        let names: Vec<&str> = input.risk_factors.iter().map(RiskFactor::name).collect();
        println!("  factors: {}", names.join(", "));
    }
    println!("------------------------------------------------------");
    println!(
        "Adjusted IWL             {:>8.0} - {:<8.0} mL/day",
        r.adjusted_iwl.low, r.adjusted_iwl.high
    );
    println!(
        "Hourly rate              {:>8.1} - {:<8.1} mL/hour",
        r.hourly_rate.low, r.hourly_rate.high
    );
    let pct = r.percent_body_weight_per_day();
    println!(
        "Body weight per day      {:>8.2} - {:<8.2} %",
        pct.low, pct.high
    );
}
