use std::fs;
use std::path::PathBuf;

use skibike_core::{
    load_params, save_params, save_report_json, save_series_csv, simulate, BikeConfiguration,
    BikeParams, DriveMode, PedalInput, StorageError, Terrain,
};

fn tmp(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("skibike_{}_{}", std::process::id(), name))
}

#[test]
fn test_save_and_load_params() {
    let path = tmp("params.json");
    let path = path.to_str().unwrap();

    let mut params = BikeParams::with_mass(85.0);
    params.terrain = Terrain::Snow;
    params.gradient_pct = 8.0;
    params.pedal = PedalInput::Force(40.0);

    save_params(&params, path).expect("kunne ikke lagre parametre");
    let loaded = load_params(path).expect("kunne ikke laste parametre");

    assert_eq!(loaded.mass_kg, 85.0);
    assert_eq!(loaded.terrain, Terrain::Snow);
    assert_eq!(loaded.gradient_pct, 8.0);
    assert_eq!(loaded.pedal, PedalInput::Force(40.0));
    assert!((loaded.wheel_radius_m - params.wheel_radius_m).abs() < 1e-12);

    fs::remove_file(path).ok();
}

#[test]
fn missing_file_is_io_error() {
    let path = tmp("does_not_exist.json");
    let err = load_params(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
}

#[test]
fn report_json_maps_infinity_to_null() {
    let path = tmp("report.json");
    let path = path.to_str().unwrap();

    let cfg = BikeConfiguration::new(BikeParams::with_mass(100.0)).unwrap();
    let report = simulate(&cfg, DriveMode::Motor, &[0.0, 5.0]);
    save_report_json(&report, path).unwrap();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(v["mode"], "motor");
    let p0 = &v["points"][0];
    assert!(p0["operational_time_h"].is_null());
    assert!(p0["battery_range_km"].is_null());
    assert!(p0["stopping_distance_m"].is_null());
    assert_eq!(p0["phase"], "in_motion");
    assert_eq!(p0["outcome"], "rolling_without_slipping");
    assert!(v["points"][1]["battery_range_km"].as_f64().unwrap() > 0.0);
    assert!(!v["messages"].as_array().unwrap().is_empty());

    fs::remove_file(path).ok();
}

#[test]
fn series_csv_has_one_row_per_speed() {
    let path = tmp("series.csv");
    let path = path.to_str().unwrap();

    let cfg = BikeConfiguration::new(BikeParams::with_mass(100.0)).unwrap();
    let report = simulate(&cfg, DriveMode::Motor, &[0.0, 1.0, 2.0]);
    save_series_csv(&report.series(), path).unwrap();

    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["speed_ms", "motor_power_w", "battery_range_km", "operation_time_h"]
    );

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][2], "inf");
    let range: f64 = rows[2][2].parse().unwrap();
    assert!(range.is_finite() && range > 0.0);

    fs::remove_file(path).ok();
}
