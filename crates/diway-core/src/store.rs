//! Storage Port
//!
//! The journal persists through this narrow port so the host storage
//! primitive stays swappable: the web frontend plugs in browser local
//! storage, tests and native binaries use [`MemoryStore`].

use std::sync::Mutex;

use crate::error::{DeckError, Result};

/// Key under which the question log is persisted
pub const STORAGE_KEY: &str = "developer_questions_log_v1";

/// Capability to read and replace the serialized question log
pub trait QuestionStore {
    /// The persisted payload, `None` if nothing was stored yet
    fn read(&self) -> Result<Option<String>>;

    /// Replace the persisted payload in full
    fn write(&self, payload: &str) -> Result<()>;
}

/// In-process store backed by a single slot
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-persisted payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }

    /// Current persisted payload, if any
    pub fn payload(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl QuestionStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| DeckError::Storage("store lock poisoned".into()))?;
        Ok(slot.clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| DeckError::Storage("store lock poisoned".into()))?;
        *slot = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write("[]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[]"));

        store.write("[1]").unwrap();
        assert_eq!(store.payload().as_deref(), Some("[1]"));
    }
}
