// core/src/series.rs
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::models::SimulationReport;

/// De tre seriene plott-kollaboratøren tegner mot fart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSeries {
    pub speeds: Vec<f64>,
    /// Elektrisk motoreffekt (W)
    pub motor_powers: Vec<f64>,
    pub battery_ranges: Vec<f64>,
    pub operation_times: Vec<f64>,
}

impl SweepSeries {
    pub fn from_report(report: &SimulationReport) -> Self {
        let n = report.points.len();
        let mut out = Self {
            speeds: Vec::with_capacity(n),
            motor_powers: Vec::with_capacity(n),
            battery_ranges: Vec::with_capacity(n),
            operation_times: Vec::with_capacity(n),
        };
        for p in &report.points {
            out.speeds.push(p.speed_ms);
            out.motor_powers.push(p.electrical_power_w);
            out.battery_ranges.push(p.battery_range_km);
            out.operation_times.push(p.operational_time_h);
        }
        out
    }

    /// Første maksimum i `values` som (fart, verdi). Uendelig rangeres over alt endelig.
    pub fn peak(&self, values: &[f64]) -> Option<(f64, f64)> {
        let (idx, v) = values
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, v)| OrderedFloat(**v))?;
        self.speeds.get(idx).map(|s| (*s, *v))
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}

impl SimulationReport {
    pub fn series(&self) -> SweepSeries {
        SweepSeries::from_report(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<f64>) -> SweepSeries {
        SweepSeries {
            speeds: (0..values.len()).map(|i| i as f64).collect(),
            motor_powers: values.clone(),
            battery_ranges: values.clone(),
            operation_times: values,
        }
    }

    #[test]
    fn peak_picks_first_maximum() {
        let s = series(vec![1.0, 5.0, 3.0, 5.0]);
        assert_eq!(s.peak(&s.motor_powers), Some((1.0, 5.0)));
    }

    #[test]
    fn peak_ranks_infinity_highest() {
        let s = series(vec![10.0, f64::INFINITY, 3.0]);
        let (speed, v) = s.peak(&s.battery_ranges).unwrap();
        assert_eq!(speed, 1.0);
        assert!(v.is_infinite());
    }

    #[test]
    fn peak_of_empty_is_none() {
        let s = series(vec![]);
        assert!(s.peak(&s.operation_times).is_none());
    }
}
