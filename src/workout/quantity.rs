//! Numeric workout fields (sets, reps, weight, duration).
//!
//! Request payloads carry these as JSON numbers, numeric strings, booleans or
//! nothing at all. [`Quantity::coerce`] folds every shape into a `Quantity`,
//! falling back to a default when the value cannot be read as a finite number.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Distance from the nearest integer under which a float is stored as that integer.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// A non-NaN, finite number held as an integer whenever it is integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    Float(f64),
}

impl Quantity {
    pub const ZERO: Quantity = Quantity::Int(0);

    /// Normalize a float. Returns `None` for NaN and infinities.
    pub fn from_f64(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        let whole = n.trunc();
        if (n - whole).abs() < INTEGRAL_TOLERANCE && whole.abs() < i64::MAX as f64 {
            Some(Quantity::Int(whole as i64))
        } else {
            Some(Quantity::Float(n))
        }
    }

    pub fn from_number(n: &Number) -> Option<Self> {
        match n.as_i64() {
            Some(i) => Some(Quantity::Int(i)),
            None => n.as_f64().and_then(Self::from_f64),
        }
    }

    /// Read a payload value as a number, or return `default`.
    ///
    /// Numbers are taken as-is, booleans count as 0/1, strings are trimmed and
    /// parsed as floats. Missing values, other JSON shapes, unparsable strings,
    /// NaN and infinities all yield `default`.
    pub fn coerce(value: Option<&Value>, default: Quantity) -> Quantity {
        let parsed = match value {
            Some(Value::Number(n)) => Self::from_number(n),
            Some(Value::Bool(b)) => Some(Quantity::Int(i64::from(*b))),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().and_then(Self::from_f64),
            _ => None,
        };
        parsed.unwrap_or(default)
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Quantity::Int(i) => i as f64,
            Quantity::Float(f) => f,
        }
    }

    /// Integer part, truncated toward zero.
    pub fn truncate(&self) -> i64 {
        match *self {
            Quantity::Int(i) => i,
            Quantity::Float(f) => f.trunc() as i64,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.as_f64() > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.as_f64() < 0.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ZERO
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Int(value)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = Number::deserialize(deserializer)?;
        Self::from_number(&n)
            .ok_or_else(|| serde::de::Error::custom(format!("not a finite number: {}", n)))
    }
}
