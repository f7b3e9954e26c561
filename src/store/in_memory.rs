//! InMemoryBackend - Vec-backed record storage for testing and embedding.

use std::sync::{Arc, PoisonError, RwLock};

use super::RecordBackend;
use crate::error::StoreError;
use crate::workout::WorkoutRecord;

/// In-memory record storage. Clone-friendly via Arc.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    items: Arc<RwLock<Vec<WorkoutRecord>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing dataset.
    pub fn with_records(items: Vec<WorkoutRecord>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

impl RecordBackend for InMemoryBackend {
    fn load(&self) -> Vec<WorkoutRecord> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, items: &[WorkoutRecord]) -> Result<(), StoreError> {
        let mut stored = self
            .items
            .write()
            .map_err(|_| StoreError::LockPoisoned("in-memory save"))?;
        *stored = items.to_vec();
        Ok(())
    }
}
