// Fitted artifact files (model, encoder)
pub mod artifacts;

// Rental dataset CSV
pub mod dataset;
