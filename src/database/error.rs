//! Settings store errors.

use thiserror::Error;

/// Failure to read or write a settings record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[cfg(test)]
    #[error("settings backend unavailable: {0}")]
    Unavailable(String),
}
