use iwl_macros::Columnar;

#[derive(Debug, Clone, Copy, Columnar)]
pub struct Estimate {
    pub low: f64,
    pub high: f64,
}

fn main() {
    let blank = Estimate::withheld();
    assert!(blank.is_withheld());
    assert!(blank.low.is_nan() && blank.high.is_nan());

    // One missing value is not a withheld row.
    let partial = Estimate { low: f64::NAN, high: 213.0 };
    assert!(!partial.is_withheld());
    assert_eq!(partial.value("high"), Some(213.0));
    assert_eq!(partial.value("mid"), None);

    let mut cols = EstimateColumns::with_capacity(3);
    cols.push(&Estimate { low: 171.0, high: 213.0 });
    cols.push_withheld();
    cols.push(&partial);
    assert_eq!(cols.len(), 3);
    assert_eq!(cols.withheld_count(), 1);
    assert!(cols.row(1).unwrap().is_withheld());
    assert_eq!(cols.column("low").map(|c| c.len()), Some(3));
    assert!(cols.column("mid").is_none());

    let named = cols.into_named_columns();
    assert_eq!(named[0].0, "low");
    assert_eq!(named[1].0, "high");
    assert_eq!(named[1].1[0], 213.0);
}
