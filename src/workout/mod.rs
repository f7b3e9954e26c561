//! Workout records - the single entity of the log.
//!
//! A [`WorkoutRecord`] is either a strength entry (sets/reps/weight) or a
//! timed entry (duration in minutes), or both. Records reach the store only
//! through [`validate_and_normalize`] or [`seed_records`].
//!
//! ## Example
//!
//! ```ignore
//! use serde_json::json;
//! use workout_log::validate_and_normalize;
//!
//! let record = validate_and_normalize(
//!     &json!({ "date": "2026-01-20", "exercise": "Running", "type": "Cardio", "duration": 30 }),
//!     None,
//! )?;
//! assert_eq!(record.duration, 30.into());
//! ```

mod quantity;
mod seed;
mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use quantity::Quantity;
pub use seed::{seed_records, SEED_BASE_DATE, SEED_COUNT};
pub use validate::validate_and_normalize;

/// Kind of workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Strength,
    Cardio,
    Endurance,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Strength,
        WorkoutType::Cardio,
        WorkoutType::Endurance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Endurance => "Endurance",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    /// Exact, case-sensitive match on the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown workout type: {}", s))
    }
}

/// A single workout log entry as stored on disk and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub exercise: String,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    #[serde(default)]
    pub sets: Quantity,
    #[serde(default)]
    pub reps: Quantity,
    #[serde(default)]
    pub weight: Quantity,
    /// Minutes.
    #[serde(default)]
    pub duration: Quantity,
}

impl WorkoutRecord {
    /// Whether the entry logs any strength amount or a duration.
    pub fn has_activity(&self) -> bool {
        has_activity(self.sets, self.reps, self.weight, self.duration)
    }
}

/// At least one of sets, reps or weight, or a duration, must be positive.
pub(crate) fn has_activity(
    sets: Quantity,
    reps: Quantity,
    weight: Quantity,
    duration: Quantity,
) -> bool {
    sets.is_positive() || reps.is_positive() || weight.is_positive() || duration.is_positive()
}
