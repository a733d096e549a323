use crate::application::prediction::{CityEncoder, LinearModel};
use crate::domain::errors::ArtifactError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the fitted linear model. Called once at startup; a failure here
/// aborts the process since no prediction can be served without it.
pub fn load_model(path: &Path) -> Result<LinearModel, ArtifactError> {
    let model: LinearModel = read_json(path)?;
    info!(
        "Loaded linear model from {:?} ({} coefficients)",
        path,
        model.coefficient_count()
    );
    Ok(model)
}

/// Loads the fitted city one-hot encoder.
pub fn load_encoder(path: &Path) -> Result<CityEncoder, ArtifactError> {
    let encoder: CityEncoder = read_json(path)?;
    info!(
        "Loaded city encoder from {:?} ({} categories)",
        path,
        encoder.categories().len()
    );
    Ok(encoder)
}
