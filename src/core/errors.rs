use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("User not found")]
    UserNotFound,
}

// Result type alias for convenience
pub type HistoryResult<T> = Result<T, HistoryError>;
