// core/src/metrics.rs
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::models::{DriveMode, Outcome};

/// Tellere for simuleringer. Eget register per instans (ingen global tilstand).
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    sweeps_total: IntCounter,
    points_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let sweeps_total =
            IntCounter::new("skibike_sweeps_total", "Number of completed speed sweeps")?;
        let points_total = IntCounterVec::new(
            Opts::new("skibike_points_total", "Simulated speed points by drive mode and outcome"),
            &["mode", "outcome"],
        )?;
        registry.register(Box::new(sweeps_total.clone()))?;
        registry.register(Box::new(points_total.clone()))?;
        Ok(Self {
            registry,
            sweeps_total,
            points_total,
        })
    }

    pub fn record_sweep(&self) {
        self.sweeps_total.inc();
    }

    pub fn record_point(&self, mode: DriveMode, outcome: Outcome) {
        self.points_total
            .with_label_values(&[mode.as_str(), outcome.label()])
            .inc();
    }

    pub fn sweeps(&self) -> u64 {
        self.sweeps_total.get()
    }

    pub fn points(&self, mode: DriveMode, outcome: Outcome) -> u64 {
        self.points_total
            .with_label_values(&[mode.as_str(), outcome.label()])
            .get()
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
