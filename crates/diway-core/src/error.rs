//! Error Types

use thiserror::Error;

/// Result type alias for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Deck error types
#[derive(Error, Debug)]
pub enum DeckError {
    /// Storage port failure (read or write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeckError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            DeckError::Storage(_) => {
                "Your question could not be saved, so it will be missing from the log.".into()
            }
            DeckError::Json(_) => "The question log could not be serialized.".into(),
        }
    }
}
