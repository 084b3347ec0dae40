#![forbid(unsafe_code)]

//! Numeric range control.

use unicode_width::UnicodeWidthStr;

use crate::Widget;

/// Minimum drawable track width before the track is dropped entirely.
const MIN_TRACK: usize = 4;

/// A labelled numeric range control bound to a session-state key.
///
/// Renders the label, a proportional track, and the current value with the
/// bounds. The bound itself comes from the data (`[1, row_count]` in the
/// viewer), so an inverted range on an empty table renders an empty track
/// rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    label: String,
    key: String,
    min: i64,
    max: i64,
    value: i64,
}

impl Slider {
    /// Create a slider with a label and bound state key.
    #[must_use]
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            min: 0,
            max: 100,
            value: 0,
        }
    }

    /// Set the inclusive range.
    #[must_use]
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the current value.
    #[must_use]
    pub fn value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// The bound state key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The inclusive range.
    #[must_use]
    pub const fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }
}

impl Widget for Slider {
    fn render(&self, width: u16) -> Vec<String> {
        let suffix = format!(" {} ({}\u{2013}{})", self.value, self.min, self.max);
        let track_width = (width as usize)
            .saturating_sub(2) // brackets
            .saturating_sub(suffix.width());
        let track = if track_width < MIN_TRACK || self.max <= self.min {
            "\u{b7}".repeat(track_width)
        } else {
            let span = (self.max - self.min) as f64;
            let pos = (self.value.clamp(self.min, self.max) - self.min) as f64;
            let filled = ((pos / span) * track_width as f64).round() as usize;
            let filled = filled.min(track_width);
            format!(
                "{}{}",
                "=".repeat(filled),
                "\u{b7}".repeat(track_width - filled)
            )
        };
        vec![self.label.clone(), format!("[{track}]{suffix}")]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_and_value() {
        let lines = Slider::new("How many rows?", "new_count")
            .range(1, 50)
            .value(5)
            .render(40);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "How many rows?");
        assert!(lines[1].ends_with("5 (1\u{2013}50)"), "{}", lines[1]);
        assert!(lines[1].starts_with('['));
    }

    #[test]
    fn full_value_fills_track() {
        let lines = Slider::new("n", "k").range(0, 10).value(10).render(30);
        assert!(!lines[1].contains('\u{b7}'), "{}", lines[1]);
        assert!(lines[1].contains("==="));
    }

    #[test]
    fn min_value_empties_track() {
        let lines = Slider::new("n", "k").range(0, 10).value(0).render(30);
        assert!(!lines[1].contains('='), "{}", lines[1]);
    }

    #[test]
    fn degenerate_range_renders_flat_track() {
        // An empty table yields the inverted bound [1, 0].
        let lines = Slider::new("n", "k").range(1, 0).value(5).render(30);
        assert!(!lines[1].contains('='), "{}", lines[1]);
        assert!(lines[1].ends_with("5 (1\u{2013}0)"), "{}", lines[1]);
    }

    #[test]
    fn narrow_width_drops_track() {
        let lines = Slider::new("n", "k").range(0, 10).value(5).render(12);
        // Too narrow for a meaningful track; still renders brackets + value.
        assert!(lines[1].contains('['));
    }
}
