pub mod cli;
pub mod drivetrain;
pub mod energy;
pub mod error;
pub mod kinematics;
pub mod metrics;
pub mod models;
pub mod physics;
pub mod resolver;
pub mod series;
pub mod simulate;
pub mod storage;

#[cfg(feature = "python")]
pub mod py;

pub use error::{ConfigError, StorageError};
pub use metrics::Metrics;
pub use models::{
    BikeConfiguration, BikeParams, DriveMode, MotionState, Outcome, PedalInput, SimulationPoint,
    SimulationReport, SlipCorrection, Terrain,
};
pub use series::SweepSeries;
pub use simulate::{simulate, simulate_with_metrics};
pub use storage::{load_params, save_params, save_report_json, save_series_csv, simulate_from_json};
