use std::path::Path;

use log::info;
use serde::Serialize;
use serde_path_to_error as spte;

use crate::error::StorageError;
use crate::models::{BikeConfiguration, BikeParams, DriveMode, SimulationReport};
use crate::series::SweepSeries;
use crate::simulate::simulate;

fn io_err(path: &str) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_string();
    move |source| StorageError::Io { path, source }
}

/// Parser parametre fra JSON-tekst, med feltsti i feilmeldingen.
pub fn parse_params(json_in: &str, origin: &str) -> Result<BikeParams, StorageError> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    let params: BikeParams = spte::deserialize(&mut de).map_err(|e| StorageError::Parse {
        path: origin.to_string(),
        field: e.path().to_string(),
        message: e.inner().to_string(),
    })?;
    // Ingenting etter objektet
    de.end().map_err(|e| StorageError::Parse {
        path: origin.to_string(),
        field: ".".to_string(),
        message: e.to_string(),
    })?;
    Ok(params)
}

/// Leser inn sykkelparametre fra disk (JSON).
pub fn load_params(path: &str) -> Result<BikeParams, StorageError> {
    let contents = std::fs::read_to_string(Path::new(path)).map_err(io_err(path))?;
    let params = parse_params(&contents, path)?;
    info!(
        "params loaded from {} (mass={}kg, terrain={:?}, gradient={}%)",
        path, params.mass_kg, params.terrain, params.gradient_pct
    );
    Ok(params)
}

/// Lagrer sykkelparametre til disk som JSON (pretty-print).
pub fn save_params(params: &BikeParams, path: &str) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(params)?;
    std::fs::write(path, json).map_err(io_err(path))?;
    info!("params saved to {}", path);
    Ok(())
}

/// Skriver rapporten som JSON. Uendelige verdier blir `null`.
pub fn save_report_json(report: &SimulationReport, path: &str) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(io_err(path))?;
    info!("report saved to {} ({} points)", path, report.points.len());
    Ok(())
}

#[derive(Serialize)]
struct SeriesRow {
    speed_ms: f64,
    motor_power_w: f64,
    battery_range_km: f64,
    operation_time_h: f64,
}

/// Skriver plott-seriene som CSV (`inf` for uendelig).
pub fn save_series_csv(series: &SweepSeries, path: &str) -> Result<(), StorageError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for i in 0..series.len() {
        wtr.serialize(SeriesRow {
            speed_ms: series.speeds[i],
            motor_power_w: series.motor_powers[i],
            battery_range_km: series.battery_ranges[i],
            operation_time_h: series.operation_times[i],
        })?;
    }
    wtr.flush().map_err(io_err(path))?;
    info!("series saved to {} ({} rows)", path, series.len());
    Ok(())
}

/// JSON inn, JSON ut: parametre + modus + farter → `{"report": ..., "series": ...}`.
/// Brukes av Python-modulen, men har ingen avhengighet til pyo3.
pub fn simulate_from_json(
    params_json: &str,
    mode: &str,
    speeds: &[f64],
) -> Result<String, StorageError> {
    let params = parse_params(params_json, "<json>")?;
    let cfg = BikeConfiguration::new(params)?;
    let mode: DriveMode = mode.parse()?;

    let report = simulate(&cfg, mode, speeds);
    let out = serde_json::json!({
        "report": report,
        "series": report.series(),
    });
    Ok(out.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip_carries_series() {
        let out = simulate_from_json(r#"{"mass_kg": 100.0}"#, "motor", &[0.0, 1.0]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["report"]["points"].as_array().unwrap().len(), 2);
        assert_eq!(v["series"]["speeds"][1], 1.0);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = simulate_from_json(r#"{"mass_kg": 100.0}"#, "turbo", &[0.0]).unwrap_err();
        assert!(matches!(err, StorageError::Config(_)));
        assert!(err.to_string().contains("turbo"));
    }

    #[test]
    fn invalid_mass_is_rejected_before_sweep() {
        let err = simulate_from_json(r#"{"mass_kg": 0.0}"#, "motor", &[0.0]).unwrap_err();
        assert!(err.to_string().contains("mass_kg"));
    }
}
