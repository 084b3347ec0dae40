#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Every interactive control posts one of these when its value changes. The
//! `key` is the control's bound session-state key; the driver stores the new
//! value under that key before dispatching any registered callback.

use crate::value::Value;

/// A user-input event produced by a bound control.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A numeric range control moved.
    Slider { key: String, value: i64 },
    /// A selection control picked an option.
    Select { key: String, value: Value },
    /// A boolean toggle flipped.
    Toggle { key: String, value: bool },
    /// End the session.
    Quit,
}

impl InputEvent {
    /// The bound state key, if the event carries one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Slider { key, .. } | Self::Select { key, .. } | Self::Toggle { key, .. } => {
                Some(key)
            }
            Self::Quit => None,
        }
    }

    /// The new value as a [`Value`], if the event carries one.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        match self {
            Self::Slider { value, .. } => Some(Value::Num(*value as f64)),
            Self::Select { value, .. } => Some(value.clone()),
            Self::Toggle { value, .. } => Some(Value::Bool(*value)),
            Self::Quit => None,
        }
    }
}
