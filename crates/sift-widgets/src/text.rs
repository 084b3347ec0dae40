#![forbid(unsafe_code)]

//! Fixed text block.

use crate::Widget;

/// A single fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Create a text block.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Widget for Text {
    fn render(&self, _width: u16) -> Vec<String> {
        self.content.lines().map(str::to_owned).collect()
    }
}
