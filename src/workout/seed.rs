use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use super::{Quantity, WorkoutRecord, WorkoutType};

/// Number of records a fresh store is filled with.
pub const SEED_COUNT: usize = 30;

/// Date of the newest seeded record; each following record is one day older.
pub const SEED_BASE_DATE: (i32, u32, u32) = (2026, 1, 23);

/// (exercise, type, sets, reps, weight, duration)
const PATTERNS: [(&str, WorkoutType, i64, i64, i64, i64); 12] = [
    ("Bench Press", WorkoutType::Strength, 2, 6, 185, 20),
    ("Squat", WorkoutType::Strength, 2, 6, 225, 30),
    ("Deadlift", WorkoutType::Strength, 2, 4, 275, 30),
    ("Overhead Press", WorkoutType::Strength, 2, 5, 120, 20),
    ("Pull Ups", WorkoutType::Strength, 2, 4, 80, 15),
    ("Running", WorkoutType::Cardio, 0, 0, 0, 35),
    ("Cycling", WorkoutType::Cardio, 0, 0, 0, 45),
    ("Basketball", WorkoutType::Cardio, 0, 0, 0, 30),
    ("Swimming", WorkoutType::Cardio, 0, 0, 0, 35),
    ("Hiking", WorkoutType::Endurance, 0, 0, 0, 65),
    ("Cycling", WorkoutType::Endurance, 0, 0, 0, 75),
    ("Walking", WorkoutType::Endurance, 0, 0, 0, 45),
];

fn base_date() -> NaiveDate {
    let (y, m, d) = SEED_BASE_DATE;
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Generate the synthetic dataset, newest first.
///
/// Content is deterministic apart from the ids, which are fresh UUIDs.
pub fn seed_records() -> Vec<WorkoutRecord> {
    let base = base_date();
    (0..SEED_COUNT)
        .map(|i| {
            let (exercise, kind, sets, reps, weight, duration) = PATTERNS[i % PATTERNS.len()];
            let date = base - Duration::days(i as i64);
            WorkoutRecord {
                id: Uuid::new_v4().to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                exercise: exercise.to_string(),
                kind,
                sets: Quantity::Int(sets),
                reps: Quantity::Int(reps),
                weight: Quantity::Int(weight),
                duration: Quantity::Int(duration),
            }
        })
        .collect()
}
