use iwl_macros::Columnar;

#[derive(Debug, Clone, Copy, Columnar)]
#[columnar(columns_name = "BalanceTable")]
pub struct FluidBalance {
    pub intake_ml: f64,
    pub output_ml: f64,
}

fn main() {
    let b = FluidBalance { intake_ml: 900.0, output_ml: 650.0 };
    let mut table = BalanceTable::with_capacity(2);
    table.push(&b);
    table.push(&b);
    assert_eq!(table.len(), 2);
    assert_eq!(table.output_ml[1], 650.0);
    assert_eq!(FluidBalance::field_names(), &["intake_ml", "output_ml"]);
}
