// Inference over the fitted artifacts
pub mod prediction;

// Per-city descriptive statistics for the charts
pub mod trends;
