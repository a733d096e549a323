use crate::domain::errors::PredictionError;
use crate::domain::property::PropertyRecord;
use crate::domain::schema::{self, RAW_FEATURE_NAMES};
use serde::{Deserialize, Serialize};

/// Fitted one-hot transform for the city column.
///
/// The category order is the order the transform was fitted with and drives
/// the position of each indicator column in the encoded vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityEncoder {
    categories: Vec<String>,
}

impl CityEncoder {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    /// Fitted category set, used to populate the city select box.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of columns a transformed record occupies.
    pub fn feature_len(&self) -> usize {
        self.categories.len() + RAW_FEATURE_NAMES.len()
    }

    /// Post-encoding feature names, indicator columns first.
    pub fn feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("city_{}", c))
            .chain(RAW_FEATURE_NAMES.iter().map(|n| n.to_string()))
            .collect()
    }

    /// Expands the city into its indicator columns and appends the raw
    /// numeric fields in schema order.
    ///
    /// A city outside the fitted set is rejected, never zero-encoded.
    pub fn transform(&self, record: &PropertyRecord) -> Result<Vec<f64>, PredictionError> {
        let hot = self
            .categories
            .iter()
            .position(|c| c == &record.city)
            .ok_or_else(|| PredictionError::UnknownCategory {
                city: record.city.clone(),
            })?;

        let mut encoded = Vec::with_capacity(self.feature_len());
        for i in 0..self.categories.len() {
            encoded.push(if i == hot { 1.0 } else { 0.0 });
        }
        encoded.extend(schema::record_to_raw_vector(record));
        Ok(encoded)
    }
}
