pub mod encoder;
pub mod model;
pub mod service;

pub use encoder::CityEncoder;
pub use model::LinearModel;
pub use service::{Prediction, PredictionService};
