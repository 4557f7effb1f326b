// core/src/error.rs
use thiserror::Error;

/// Feil ved bygging av konfigurasjon (før noen sweep starter).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("unknown drive mode `{0}` (expected pedal, motor or both)")]
    UnknownMode(String),
    #[error("unknown terrain `{0}` (expected snow, ice or default)")]
    UnknownTerrain(String),
    #[error("invalid speed list `{0}`")]
    InvalidSpeeds(String),
}

/// Feil ved lesing/skriving av parametre, rapporter og serier.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path} at `{field}`: {message}")]
    Parse {
        path: String,
        field: String,
        message: String,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
