mod config;
mod error;
mod listing;
mod store;
mod workout;

#[cfg(feature = "http")]
pub mod http;

pub use config::Config;
pub use error::{StoreError, WorkoutError};
pub use listing::{paginate, parse_page, sort_workouts, Page, DEFAULT_PAGE_SIZE};
pub use store::{InMemoryBackend, JsonFileBackend, RecordBackend, WorkoutStore};
pub use workout::{
    seed_records, validate_and_normalize, Quantity, WorkoutRecord, WorkoutType, SEED_BASE_DATE,
    SEED_COUNT,
};
