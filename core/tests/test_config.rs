use skibike_core::models::EQUIPMENT_MASS_KG;
use skibike_core::storage::parse_params;
use skibike_core::{
    BikeConfiguration, BikeParams, ConfigError, DriveMode, PedalInput, SlipCorrection, StorageError,
    Terrain,
};

#[test]
fn equipment_mass_and_incline_are_derived() {
    let mut p = BikeParams::with_mass(100.0);
    p.gradient_pct = 20.0;
    let cfg = BikeConfiguration::new(p).unwrap();
    assert_eq!(cfg.mass_kg, 100.0 + EQUIPMENT_MASS_KG);
    assert!((cfg.incline_angle - 0.2_f64.atan()).abs() < 1e-15);
}

#[test]
fn terrain_table_fills_coefficients() {
    let mut p = BikeParams::with_mass(80.0);
    p.terrain = Terrain::Ice;
    let cfg = BikeConfiguration::new(p).unwrap();
    assert_eq!(cfg.mu_static_wheel, 0.1);
    assert_eq!(cfg.mu_kinetic_skis, 0.03);
    assert_eq!(cfg.mu_kinetic_wheel, 0.2);
    assert_eq!(cfg.rolling_resistance, 0.09);
}

#[test]
fn explicit_coefficient_overrides_table() {
    let mut p = BikeParams::with_mass(80.0);
    p.terrain = Terrain::Snow;
    p.rolling_resistance = Some(0.02);
    let cfg = BikeConfiguration::new(p).unwrap();
    assert_eq!(cfg.rolling_resistance, 0.02);
    assert_eq!(cfg.mu_kinetic_skis, 0.05);
}

#[test]
fn rejects_non_positive_mass() {
    let err = BikeConfiguration::new(BikeParams::with_mass(0.0)).unwrap_err();
    match err {
        ConfigError::InvalidParameter { field, .. } => assert_eq!(field, "mass_kg"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(BikeConfiguration::new(BikeParams::with_mass(-5.0)).is_err());
}

#[test]
fn rejects_bad_geometry_and_battery() {
    let mut p = BikeParams::with_mass(80.0);
    p.wheel_radius_m = 0.0;
    assert!(matches!(
        BikeConfiguration::new(p).unwrap_err(),
        ConfigError::InvalidParameter { field: "wheel_radius_m", .. }
    ));

    let mut p = BikeParams::with_mass(80.0);
    p.battery_capacity_ah = 0.0;
    assert!(matches!(
        BikeConfiguration::new(p).unwrap_err(),
        ConfigError::InvalidParameter { field: "battery_capacity_ah", .. }
    ));
}

#[test]
fn rejects_negative_or_non_finite_inputs() {
    let mut p = BikeParams::with_mass(80.0);
    p.mu_static_wheel = Some(-0.1);
    assert!(BikeConfiguration::new(p).is_err());

    let mut p = BikeParams::with_mass(80.0);
    p.pedal = PedalInput::Power(-10.0);
    assert!(matches!(
        BikeConfiguration::new(p).unwrap_err(),
        ConfigError::InvalidParameter { field: "pedal", .. }
    ));

    let mut p = BikeParams::with_mass(80.0);
    p.gradient_pct = f64::NAN;
    assert!(BikeConfiguration::new(p).is_err());
}

#[test]
fn zero_motor_power_is_allowed() {
    let mut p = BikeParams::with_mass(80.0);
    p.max_motor_power_w = 0.0;
    assert!(BikeConfiguration::new(p).is_ok());
}

#[test]
fn mode_parsing() {
    assert_eq!("pedal".parse::<DriveMode>().unwrap(), DriveMode::Pedal);
    assert_eq!(" BOTH ".parse::<DriveMode>().unwrap(), DriveMode::Both);
    assert_eq!(DriveMode::Motor.to_string(), "motor");
    assert_eq!(
        "1".parse::<DriveMode>().unwrap_err(),
        ConfigError::UnknownMode("1".to_string())
    );
}

#[test]
fn terrain_parsing() {
    assert_eq!("Snow".parse::<Terrain>().unwrap(), Terrain::Snow);
    assert_eq!("default".parse::<Terrain>().unwrap(), Terrain::Default);
    assert!(matches!("mud".parse::<Terrain>(), Err(ConfigError::UnknownTerrain(_))));
    assert!("".parse::<Terrain>().is_err());
}

#[test]
fn json_params_use_defaults() {
    let json = r#"{"mass_kg": 80, "terrain": "ice", "pedal": {"power": 150}}"#;
    let p = parse_params(json, "inline").unwrap();
    assert_eq!(p.mass_kg, 80.0);
    assert_eq!(p.terrain, Terrain::Ice);
    assert_eq!(p.pedal, PedalInput::Power(150.0));
    assert_eq!(p.max_motor_power_w, 1000.0);
    assert_eq!(p.battery_voltage_v, 48.0);
    assert_eq!(p.gradient_pct, 0.0);
    assert_eq!(p.speed_of_interest_ms, 0.0);
    assert_eq!(p.slip_correction, SlipCorrection::AddToLoad);

    let json = r#"{"mass_kg": 80, "slip_correction": "subtract_from_load"}"#;
    let p = parse_params(json, "inline").unwrap();
    assert_eq!(p.slip_correction, SlipCorrection::SubtractFromLoad);
}

#[test]
fn json_errors_carry_field_path() {
    let err = parse_params(r#"{"mass_kg": "heavy"}"#, "inline").unwrap_err();
    match err {
        StorageError::Parse { path, field, .. } => {
            assert_eq!(path, "inline");
            assert_eq!(field, "mass_kg");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse_params(r#"{"mass_kg": 80, "terrain": "gravel"}"#, "inline").unwrap_err();
    assert!(err.to_string().contains("terrain"));
}

#[test]
fn json_trailing_content_is_rejected() {
    let err = parse_params(r#"{"mass_kg": 80} {"mass_kg": -1} garbage"#, "inline").unwrap_err();
    assert!(matches!(err, StorageError::Parse { .. }));
    assert!(parse_params("{\"mass_kg\": 80}\n  ", "inline").is_ok());
}
