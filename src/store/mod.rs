//! Workout storage - a backend holding the whole dataset, and the store that
//! serializes every read-modify-write against it.
//!
//! Each [`WorkoutStore`] operation is one critical section: take the lock,
//! load everything, top the dataset up with seed records if it has fewer than
//! [`SEED_COUNT`], compute, and (for writes) save everything back.
//!
//! ## Example
//!
//! ```ignore
//! use workout_log::{JsonFileBackend, WorkoutStore};
//!
//! let store = WorkoutStore::new(JsonFileBackend::new("data/workouts.json"));
//! let page = store.list(1)?;
//! assert_eq!(page.total, 30);
//! ```

mod in_memory;
mod json_file;

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::info;

use crate::error::{StoreError, WorkoutError};
use crate::listing::{paginate, sort_workouts, Page, DEFAULT_PAGE_SIZE};
use crate::workout::{seed_records, validate_and_normalize, WorkoutRecord, SEED_COUNT};

pub use in_memory::InMemoryBackend;
pub use json_file::JsonFileBackend;

/// Whole-dataset storage for workout records.
pub trait RecordBackend: Send + Sync {
    /// Every stored record. Unreadable storage reads as empty.
    fn load(&self) -> Vec<WorkoutRecord>;

    /// Replace the stored dataset with `items`.
    fn save(&self, items: &[WorkoutRecord]) -> Result<(), StoreError>;
}

/// Lock-guarded CRUD over a [`RecordBackend`].
pub struct WorkoutStore<B> {
    backend: Mutex<B>,
    page_size: usize,
}

impl<B: RecordBackend> WorkoutStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Mutex::new(backend),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Items per page for [`list`](Self::list). Values below 1 are raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, B>, StoreError> {
        self.backend
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Replace the dataset with fresh seed records if it is short.
    pub fn ensure_seeded(&self) -> Result<(), StoreError> {
        let backend = self.lock("seed")?;
        load_seeded(&*backend).map(|_| ())
    }

    /// Number of stored records, without seeding.
    pub fn count(&self) -> Result<usize, StoreError> {
        let backend = self.lock("count")?;
        Ok(backend.load().len())
    }

    /// The requested page of the sorted dataset.
    pub fn list(&self, page: i64) -> Result<Page<WorkoutRecord>, StoreError> {
        let backend = self.lock("list")?;
        let items = sort_workouts(load_seeded(&*backend)?);
        Ok(paginate(items, page, self.page_size))
    }

    pub fn get(&self, id: &str) -> Result<Option<WorkoutRecord>, StoreError> {
        let backend = self.lock("get")?;
        Ok(load_seeded(&*backend)?.into_iter().find(|w| w.id == id))
    }

    /// Validate `payload` as a new record and append it.
    pub fn create(&self, payload: &Value) -> Result<WorkoutRecord, WorkoutError> {
        let backend = self.lock("create")?;
        let mut items = load_seeded(&*backend)?;

        let record = validate_and_normalize(payload, None)?;
        items.push(record.clone());
        backend.save(&items)?;

        info!(id = %record.id, exercise = %record.exercise, "workout created");
        Ok(record)
    }

    /// Replace every field but the id of an existing record.
    ///
    /// A missing record is reported before the payload is looked at.
    pub fn update(&self, id: &str, payload: &Value) -> Result<WorkoutRecord, WorkoutError> {
        let backend = self.lock("update")?;
        let mut items = load_seeded(&*backend)?;

        let slot = items
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| WorkoutError::NotFound(id.to_string()))?;

        let record = validate_and_normalize(payload, Some(id))?;
        *slot = record.clone();
        backend.save(&items)?;

        info!(id = %record.id, "workout updated");
        Ok(record)
    }

    pub fn delete(&self, id: &str) -> Result<(), WorkoutError> {
        let backend = self.lock("delete")?;
        let mut items = load_seeded(&*backend)?;

        let before = items.len();
        items.retain(|w| w.id != id);
        if items.len() == before {
            return Err(WorkoutError::NotFound(id.to_string()));
        }
        backend.save(&items)?;

        info!(id, "workout deleted");
        Ok(())
    }
}

/// Load the dataset, reseeding first when it holds fewer than [`SEED_COUNT`]
/// records. Caller holds the store lock.
fn load_seeded<B: RecordBackend>(backend: &B) -> Result<Vec<WorkoutRecord>, StoreError> {
    let items = backend.load();
    if items.len() >= SEED_COUNT {
        return Ok(items);
    }

    let seeded = seed_records();
    backend.save(&seeded)?;
    info!(previous = items.len(), seeded = seeded.len(), "store seeded");
    Ok(seeded)
}
