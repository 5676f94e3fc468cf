use iwl_macros::Columnar;

#[derive(Columnar)]
pub struct Vitals {
    pub heart_rate: f64,
    pub beats: u32,
}

fn main() {}
