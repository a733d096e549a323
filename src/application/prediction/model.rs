use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};

/// A fitted linear regression reduced to what inference needs: one learned
/// coefficient per encoded column plus the intercept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn coefficient_count(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Dot product of the encoded vector with the coefficients, plus
    /// intercept. A length mismatch means the encoder and model artifacts
    /// were fitted against different schemas.
    pub fn predict(&self, encoded: &[f64]) -> Result<f64, PredictionError> {
        if encoded.len() != self.coefficients.len() {
            return Err(PredictionError::DimensionMismatch {
                encoded: encoded.len(),
                expected: self.coefficients.len(),
            });
        }

        let dot: f64 = encoded
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, c)| x * c)
            .sum();
        Ok(dot + self.intercept)
    }
}
