use iwl_macros::Columnar;

#[derive(Debug, Clone, Copy, PartialEq, Columnar)]
pub struct VitalsRow {
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    pub temperature: f64,
}

fn main() {
    let r = VitalsRow { heart_rate: 120.0, respiratory_rate: 40.0, temperature: 37.2 };
    let mut cols = VitalsRowColumns::with_capacity(10);
    assert!(cols.is_empty());
    cols.push(&r);
    assert_eq!(cols.len(), 1);
    assert_eq!(cols.row(0), Some(r));
    assert_eq!(cols.row(1), None);
    assert_eq!(
        VitalsRow::field_names(),
        &["heart_rate", "respiratory_rate", "temperature"]
    );
}
