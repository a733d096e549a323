use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while encoding an input record or running inference
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("unknown city category: '{city}' is not in the fitted category set")]
    UnknownCategory { city: String },

    #[error("encoded vector has {encoded} columns but the model expects {expected}")]
    DimensionMismatch { encoded: usize, expected: usize },
}

/// Errors raised while loading the model or encoder artifacts at startup
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact file not found: {path:?}")]
    Missing { path: PathBuf },

    #[error("failed to read artifact {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize artifact {path:?}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading the rental dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {path:?}")]
    Missing { path: PathBuf },

    #[error("failed to read dataset {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset row {row} in {path:?}")]
    Parse {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
}
