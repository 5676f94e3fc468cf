use iwl_macros::Columnar;

#[derive(Columnar)]
pub struct Range(f64, f64);

fn main() {}
