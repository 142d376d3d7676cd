pub mod analytics;
pub mod errors;
pub mod records;
pub mod store;
