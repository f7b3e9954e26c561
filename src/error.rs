use std::error::Error;
use std::fmt;

/// Error raised by the record store when persisting fails.
///
/// A missing or unparsable data file is not an error: it reads as an
/// empty dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    Io(String),
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Io(msg) => write!(f, "store io error: {}", msg),
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
        }
    }
}

impl Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

/// Error type for workout operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutError {
    /// Payload failed validation; one message per failed rule.
    Invalid(Vec<String>),
    /// No record with this id.
    NotFound(String),
    /// Persisting the change failed.
    Store(StoreError),
}

impl fmt::Display for WorkoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutError::Invalid(errors) => write!(f, "invalid workout: {}", errors.join(" ")),
            WorkoutError::NotFound(id) => write!(f, "workout not found: {}", id),
            WorkoutError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl Error for WorkoutError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WorkoutError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for WorkoutError {
    fn from(err: StoreError) -> Self {
        WorkoutError::Store(err)
    }
}

impl WorkoutError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            WorkoutError::Invalid(_) => 400,
            WorkoutError::NotFound(_) => 404,
            WorkoutError::Store(_) => 500,
        }
    }
}
