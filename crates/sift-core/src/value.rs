#![forbid(unsafe_code)]

//! Typed cell values.
//!
//! [`Value`] is the unit of data everywhere in sift: table cells, session
//! state entries, select-box options, and memo cache keys are all `Value`s.
//!
//! # Invariants
//!
//! 1. Equality and hashing agree: `a == b` implies `hash(a) == hash(b)`.
//! 2. Numeric comparison goes through canonical bits: all NaNs are equal to
//!    each other, and `-0.0 == +0.0`. This makes `Value` usable as a map key
//!    even when a numeric column contains missing cells loaded as NaN.
//! 3. `Display` output is stable for a given value (used in rendered
//!    documents and snapshot tests).

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single typed cell value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// UTF-8 text.
    Str(String),
    /// Numeric cell. Missing cells in numeric columns load as NaN.
    Num(f64),
    /// Boolean, used for toggle state.
    Bool(bool),
}

impl Value {
    /// Canonical bit pattern for numeric equality and hashing.
    ///
    /// Collapses every NaN to one bit pattern and `-0.0` to `+0.0`.
    fn num_bits(n: f64) -> u64 {
        if n.is_nan() {
            f64::NAN.to_bits()
        } else if n == 0.0 {
            0.0f64.to_bits()
        } else {
            n.to_bits()
        }
    }

    /// The string contents, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric contents, if this is a `Num`.
    #[must_use]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric contents truncated to `i64`, if this is a finite `Num`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Num(n) if n.is_finite() => Some(*n as i64),
            _ => None,
        }
    }

    /// The boolean contents, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Num(a), Self::Num(b)) => Self::num_bits(*a) == Self::num_bits(*b),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Str(s) => {
                0u8.hash(state);
                s.hash(state);
            }
            Self::Num(n) => {
                1u8.hash(state);
                Self::num_bits(*n).hash(state);
            }
            Self::Bool(b) => {
                2u8.hash(state);
                b.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => {
                if n.is_nan() {
                    f.write_str("")
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Num(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn nan_equals_nan() {
        assert_eq!(Value::Num(f64::NAN), Value::Num(f64::NAN));
        assert_eq!(hash_of(&Value::Num(f64::NAN)), hash_of(&Value::Num(f64::NAN)));
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(Value::Num(-0.0), Value::Num(0.0));
        assert_eq!(hash_of(&Value::Num(-0.0)), hash_of(&Value::Num(0.0)));
    }

    #[test]
    fn cross_type_never_equal() {
        assert_ne!(Value::Str("1".into()), Value::Num(1.0));
        assert_ne!(Value::Bool(true), Value::Num(1.0));
    }

    #[test]
    fn display_integral_num_has_no_fraction() {
        assert_eq!(Value::Num(5.0).to_string(), "5");
        assert_eq!(Value::Num(5.25).to_string(), "5.25");
        assert_eq!(Value::Num(f64::NAN).to_string(), "");
    }

    #[test]
    fn as_i64_rejects_nan() {
        assert_eq!(Value::Num(f64::NAN).as_i64(), None);
        assert_eq!(Value::Num(10.0).as_i64(), Some(10));
    }

    #[test]
    fn serde_untagged_round_trip() {
        let v = Value::Str("hoboken".into());
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"hoboken\"");
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let b = Value::Bool(true);
        assert_eq!(serde_json::to_string(&b).unwrap(), "true");
    }
}
