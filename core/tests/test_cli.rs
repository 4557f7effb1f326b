use skibike_core::cli::{format_report, parse_speeds};
use skibike_core::{simulate, BikeConfiguration, BikeParams, ConfigError, DriveMode};

#[test]
fn parses_inclusive_and_exclusive_ranges() {
    let v = parse_speeds("0..=10").unwrap();
    assert_eq!(v.len(), 11);
    assert_eq!(v[10], 10.0);

    let v = parse_speeds("0..11").unwrap();
    assert_eq!(v.len(), 11);
    assert_eq!(*v.last().unwrap(), 10.0);
}

#[test]
fn parses_explicit_list() {
    assert_eq!(parse_speeds("0, 2.5,5").unwrap(), vec![0.0, 2.5, 5.0]);
}

#[test]
fn rejects_bad_speed_lists() {
    assert!(matches!(parse_speeds(""), Err(ConfigError::InvalidSpeeds(_))));
    assert!(parse_speeds("a..b").is_err());
    assert!(parse_speeds("5..5").is_err());
    assert!(parse_speeds("1,inf").is_err());
}

#[test]
fn report_text_has_table_and_peaks() {
    let mut p = BikeParams::with_mass(100.0);
    p.speed_of_interest_ms = 5.0;
    let cfg = BikeConfiguration::new(p).unwrap();
    let report = simulate(&cfg, DriveMode::Motor, &parse_speeds("0..=10").unwrap());
    let text = format_report(&report, &cfg);

    assert!(text.starts_with("--- Ski-bike Report (motor) ---"));
    assert!(text.contains("Gradient: 0%"));
    assert!(text.contains("rolling_without_slipping"));
    let power_line = text.lines().find(|l| l.starts_with("Max motor power:")).unwrap();
    assert!(power_line.ends_with("at 10m/s"));
    // uendelig rekkevidde ved stillstand vinner; flatt gir ingen klatring
    assert!(text.contains("Max range: infkm at 0m/s"));
    assert!(text.contains("Climb efficiency over max range: 0%"));
}
