/// Python extension `_core`.
///
/// Exposes the `iwl` submodule and `rust_version()`. Everything is a thin
/// shell over the Rust API; `IwlError` surfaces as `ValueError`.
mod convert;
mod iwl;

use pyo3::prelude::*;

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rust_version, m)?)?;

    let sub = iwl::module(m.py())?;
    m.add_submodule(&sub)?;

    // `from iwl_calc._core.iwl import ...` resolves through sys.modules.
    let qualified = format!("{}.iwl", m.name()?);
    m.py()
        .import("sys")?
        .getattr("modules")?
        .set_item(qualified, &sub)?;

    tracing::debug!("registered python module");
    Ok(())
}

#[pyfunction]
fn rust_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
