use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{has_activity, Quantity, WorkoutRecord, WorkoutType};
use crate::error::WorkoutError;

pub const MAX_EXERCISE_LEN: usize = 40;

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Turn a raw payload into a record, or collect every rule it breaks.
///
/// `existing_id` keeps the id of the record being replaced; otherwise a new
/// UUID is minted. Any payload that is not a JSON object is read as `{}`.
/// A client-supplied `id` field is ignored.
pub fn validate_and_normalize(
    payload: &Value,
    existing_id: Option<&str>,
) -> Result<WorkoutRecord, WorkoutError> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    let id = existing_id
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let date = text_field(fields, "date");
    let exercise = text_field(fields, "exercise");
    let kind = text_field(fields, "type");
    let duration = Quantity::coerce(fields.get("duration"), Quantity::ZERO);
    let sets = Quantity::coerce(fields.get("sets"), Quantity::ZERO);
    let reps = Quantity::coerce(fields.get("reps"), Quantity::ZERO);
    let weight = Quantity::coerce(fields.get("weight"), Quantity::ZERO);

    let mut errors = Vec::new();

    if date.is_empty() {
        errors.push("Date is required.".to_string());
    }
    if exercise.is_empty() {
        errors.push("Exercise is required.".to_string());
    }
    if kind.is_empty() {
        errors.push("Type is required.".to_string());
    }

    // Calendar check runs only once the shape is right.
    if !date.is_empty() {
        if !DATE_RE.is_match(&date) {
            errors.push("Date must be in YYYY-MM-DD format.".to_string());
        } else if !is_calendar_date(&date) {
            errors.push("Date is invalid.".to_string());
        }
    }

    if exercise.chars().count() > MAX_EXERCISE_LEN {
        errors.push(format!(
            "Exercise must be {} characters or fewer.",
            MAX_EXERCISE_LEN
        ));
    }

    let parsed_kind = kind.parse::<WorkoutType>().ok();
    if !kind.is_empty() && parsed_kind.is_none() {
        errors.push("Type must be Strength, Cardio, or Endurance.".to_string());
    }

    // Only the first negative field is reported.
    if [duration, sets, reps, weight].iter().any(Quantity::is_negative) {
        errors.push("Numeric values must be 0 or higher.".to_string());
    }

    if !has_activity(sets, reps, weight, duration) {
        errors.push("Enter duration or sets/reps/weight.".to_string());
    }

    match parsed_kind {
        Some(kind) if errors.is_empty() => Ok(WorkoutRecord {
            id,
            date,
            exercise,
            kind,
            sets,
            reps,
            weight,
            duration,
        }),
        _ => Err(WorkoutError::Invalid(errors)),
    }
}

/// Real date from year 1 onward; chrono alone would also accept year 0.
fn is_calendar_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok_and(|d| d.year() >= 1)
}

/// Trimmed string value; missing and non-string values read as empty.
fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
