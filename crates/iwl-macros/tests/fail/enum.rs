use iwl_macros::Columnar;

#[derive(Columnar)]
pub enum Reading {
    Height(f64),
    Weight(f64),
}

fn main() {}
