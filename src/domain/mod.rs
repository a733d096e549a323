// Property input domain
pub mod property;

// Feature ordering shared by encoder and model
pub mod schema;

// Domain-specific error types
pub mod errors;
