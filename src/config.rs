use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Locations of the fitted artifacts and the rental dataset.
///
/// All three files are read once at startup and held read-only for the
/// lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub encoder_path: PathBuf,
    pub dataset_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH")
            .unwrap_or_else(|_| "data/model.json".to_string())
            .into();

        let encoder_path = env::var("ENCODER_PATH")
            .unwrap_or_else(|_| "data/encoder_city.json".to_string())
            .into();

        let dataset_path = env::var("DATASET_PATH")
            .unwrap_or_else(|_| "data/houses_to_rent_v2.csv".to_string())
            .into();

        Ok(Self {
            model_path,
            encoder_path,
            dataset_path,
        })
    }
}
