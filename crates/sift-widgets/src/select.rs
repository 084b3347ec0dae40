#![forbid(unsafe_code)]

//! Single-selection dropdown.

use sift_core::Value;

use crate::{Widget, fit};

/// A labelled single-selection control over a fixed option list.
///
/// The option list is drawn from the data (distinct values of a column in
/// the viewer); the selected option is the current session-state value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBox {
    label: String,
    key: String,
    options: Vec<Value>,
    selected: Option<Value>,
}

impl SelectBox {
    /// Create a select box with a label and bound state key.
    #[must_use]
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            options: Vec::new(),
            selected: None,
        }
    }

    /// Set the option list.
    #[must_use]
    pub fn options(mut self, options: Vec<Value>) -> Self {
        self.options = options;
        self
    }

    /// Set the selected option.
    #[must_use]
    pub fn selected(mut self, value: Value) -> Self {
        self.selected = Some(value);
        self
    }

    /// The bound state key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 1-based position of the selected option, if it is in the list.
    #[must_use]
    pub fn selected_position(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.options.iter().position(|o| o == selected).map(|i| i + 1)
    }
}

impl Widget for SelectBox {
    fn render(&self, width: u16) -> Vec<String> {
        let shown = match &self.selected {
            Some(v) => v.to_string(),
            None => "\u{2014}".to_owned(),
        };
        let counter = match self.selected_position() {
            Some(pos) => format!(" ({pos} of {})", self.options.len()),
            None => format!(" (0 of {})", self.options.len()),
        };
        let budget = (width as usize).saturating_sub(2 + counter.len()).max(1);
        vec![
            self.label.clone(),
            format!("\u{25be} {}{counter}", fit(&shown, budget)),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
