pub mod api;
pub mod config;
pub mod core;

// Re-exports
pub use crate::api::routes::{create_router, AppState};
pub use crate::config::Settings;
pub use crate::core::analytics::BillAnalytics;
pub use crate::core::errors::{HistoryError, HistoryResult};
pub use crate::core::store::{InMemoryStore, RecordStore};
