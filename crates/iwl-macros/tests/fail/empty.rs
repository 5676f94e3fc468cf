use iwl_macros::Columnar;

#[derive(Columnar)]
pub struct Empty {}

fn main() {}
