use super::encoder::CityEncoder;
use super::model::LinearModel;
use crate::domain::errors::PredictionError;
use crate::domain::property::PropertyRecord;
use tracing::info;

/// A single estimated total rental cost in R$.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub total: f64,
}

impl Prediction {
    /// Value rounded to 2 decimal places for display.
    pub fn rounded(&self) -> f64 {
        (self.total * 100.0).round() / 100.0
    }
}

/// Inference service over the two fitted artifacts.
///
/// Both artifacts are injected at construction and held immutably for the
/// lifetime of the service; column agreement between them is checked once
/// here so the per-request path never has to.
#[derive(Debug)]
pub struct PredictionService {
    encoder: CityEncoder,
    model: LinearModel,
}

impl PredictionService {
    pub fn new(encoder: CityEncoder, model: LinearModel) -> Result<Self, PredictionError> {
        if encoder.feature_len() != model.coefficient_count() {
            return Err(PredictionError::DimensionMismatch {
                encoded: encoder.feature_len(),
                expected: model.coefficient_count(),
            });
        }

        info!(
            "Prediction service ready: {} encoded features, {} city categories",
            encoder.feature_len(),
            encoder.categories().len()
        );

        Ok(Self { encoder, model })
    }

    pub fn encoder(&self) -> &CityEncoder {
        &self.encoder
    }

    /// Encodes the record and runs the linear model over it.
    /// Pure function of its input and the injected artifacts.
    pub fn predict(&self, record: &PropertyRecord) -> Result<Prediction, PredictionError> {
        let encoded = self.encoder.transform(record)?;
        let total = self.model.predict(&encoded)?;
        Ok(Prediction { total })
    }

    /// Absolute value of each learned coefficient paired with the feature
    /// name at the same position, sorted descending by magnitude.
    ///
    /// Name/coefficient agreement is guaranteed by the constructor check.
    pub fn importances(&self) -> Vec<(String, f64)> {
        let mut pairs: Vec<(String, f64)> = self
            .encoder
            .feature_names()
            .into_iter()
            .zip(self.model.coefficients().iter().map(|c| c.abs()))
            .collect();

        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs
    }
}
