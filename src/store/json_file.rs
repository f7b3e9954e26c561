//! JsonFileBackend - the whole dataset as one pretty-printed JSON array.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use super::RecordBackend;
use crate::error::StoreError;
use crate::workout::WorkoutRecord;

/// File-backed record storage.
///
/// Reads are forgiving: a missing file, invalid JSON or a non-array document
/// all read as an empty list, and array elements that are not records are
/// skipped. Writes go to a temporary file in the same directory which is then
/// renamed over the target, so a reader sees either the old or the new file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workouts.json".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl RecordBackend for JsonFileBackend {
    fn load(&self) -> Vec<WorkoutRecord> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file unreadable, treating as empty");
                return Vec::new();
            }
        };

        let elements = match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Array(elements)) => elements,
            Ok(_) => {
                warn!(path = %self.path.display(), "data file is not a JSON array, treating as empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file is not valid JSON, treating as empty");
                return Vec::new();
            }
        };

        elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                match serde_json::from_value::<WorkoutRecord>(element) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(path = %self.path.display(), index, error = %e, "skipping malformed record");
                        None
                    }
                }
            })
            .collect()
    }

    fn save(&self, items: &[WorkoutRecord]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_vec_pretty(items)?;
        let tmp = self.temp_path();
        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
