use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::models::Terrain;
use crate::storage::simulate_from_json;

/// Kjør en sweep og returnér rapport + plott-serier som JSON-streng.
#[pyfunction]
fn simulate_json(params_json: &str, mode: &str, speeds: Vec<f64>) -> PyResult<String> {
    simulate_from_json(params_json, mode, &speeds).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// (mu_static_wheel, mu_kinetic_skis, mu_kinetic_wheel, rolling_resistance) for et underlag.
#[pyfunction]
fn terrain_friction(terrain: &str) -> PyResult<(f64, f64, f64, f64)> {
    let t: Terrain = terrain
        .parse()
        .map_err(|e: crate::ConfigError| PyValueError::new_err(e.to_string()))?;
    let f = t.friction();
    Ok((f.mu_static_wheel, f.mu_kinetic_skis, f.mu_kinetic_wheel, f.rolling_resistance))
}

#[pymodule]
fn skibike_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_json, m)?)?;
    m.add_function(wrap_pyfunction!(terrain_friction, m)?)?;
    Ok(())
}
