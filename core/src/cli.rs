use std::fmt::Write as _;

use crate::energy::{battery_energy_wh, climb_efficiency_pct};
use crate::error::ConfigError;
use crate::models::{BikeConfiguration, SimulationReport};
use crate::physics::RoundTo;

/// Tolker en fartsliste: "0..=10", "0..11" (eksklusiv, heltallssteg) eller "0,2.5,5".
pub fn parse_speeds(spec: &str) -> Result<Vec<f64>, ConfigError> {
    let bad = || ConfigError::InvalidSpeeds(spec.to_string());
    let s = spec.trim();

    let speeds: Vec<f64> = if let Some((a, b)) = s.split_once("..") {
        let (b, inclusive) = match b.strip_prefix('=') {
            Some(rest) => (rest, true),
            None => (b, false),
        };
        let start: i64 = a.trim().parse().map_err(|_| bad())?;
        let end: i64 = b.trim().parse().map_err(|_| bad())?;
        if inclusive {
            (start..=end).map(|x| x as f64).collect()
        } else {
            (start..end).map(|x| x as f64).collect()
        }
    } else {
        s.split(',')
            .map(|t| t.trim().parse::<f64>().map_err(|_| bad()))
            .collect::<Result<_, _>>()?
    };

    if speeds.is_empty() || speeds.iter().any(|v| !v.is_finite()) {
        return Err(bad());
    }
    Ok(speeds)
}

fn cell(x: f64) -> String {
    format!("{}", x.round_to(2))
}

/// Tekstrapport: meldinger for valgt fart + tabell over hele sweepen.
pub fn format_report(report: &SimulationReport, cfg: &BikeConfiguration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Ski-bike Report ({}) ---", report.mode);
    for m in &report.messages {
        let _ = writeln!(out, "{m}");
    }

    let _ = writeln!(
        out,
        "{:>6} {:>26} {:>10} {:>10} {:>12} {:>10}",
        "v m/s", "outcome", "load N", "P_el W", "range km", "time h"
    );
    for p in &report.points {
        let _ = writeln!(
            out,
            "{:>6} {:>26} {:>10} {:>10} {:>12} {:>10}",
            p.speed_ms,
            p.outcome.label(),
            cell(p.effective_load),
            cell(p.electrical_power_w),
            cell(p.battery_range_km),
            cell(p.operational_time_h),
        );
    }

    let series = report.series();
    if let Some((v, w)) = series.peak(&series.motor_powers) {
        let _ = writeln!(out, "Max motor power: {}W at {}m/s", cell(w), v);
    }
    if let Some((v, km)) = series.peak(&series.battery_ranges) {
        let _ = writeln!(out, "Max range: {}km at {}m/s", cell(km), v);
        let eff = climb_efficiency_pct(
            cfg.mass_kg,
            cfg.incline_angle,
            km,
            battery_energy_wh(cfg.battery_voltage_v, cfg.battery_capacity_ah),
        );
        let _ = writeln!(out, "Climb efficiency over max range: {}%", cell(eff));
    }
    if let Some((v, h)) = series.peak(&series.operation_times) {
        let _ = writeln!(out, "Max time: {}h at {}m/s", cell(h), v);
    }
    out
}

pub fn print_report(report: &SimulationReport, cfg: &BikeConfiguration) {
    print!("{}", format_report(report, cfg));
}
