#![forbid(unsafe_code)]

//! Boolean toggle switch.

use crate::Widget;

/// A labelled on/off switch bound to a session-state key.
///
/// The color fields are cosmetic hints carried through to richer render
/// targets; the text renderer ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    label: String,
    key: String,
    on: bool,
    active_color: String,
    inactive_color: String,
    track_color: String,
}

impl Toggle {
    /// Create a toggle with a label and bound state key.
    #[must_use]
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            on: false,
            active_color: "#11567f".to_owned(),
            inactive_color: "#d3d3d3".to_owned(),
            track_color: "#29b5e8".to_owned(),
        }
    }

    /// Set the current state.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set the knob color shown while on.
    #[must_use]
    pub fn active_color(mut self, hex: impl Into<String>) -> Self {
        self.active_color = hex.into();
        self
    }

    /// Set the knob color shown while off.
    #[must_use]
    pub fn inactive_color(mut self, hex: impl Into<String>) -> Self {
        self.inactive_color = hex.into();
        self
    }

    /// Set the track color.
    #[must_use]
    pub fn track_color(mut self, hex: impl Into<String>) -> Self {
        self.track_color = hex.into();
        self
    }

    /// The bound state key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the switch is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }
}

impl Widget for Toggle {
    fn render(&self, _width: u16) -> Vec<String> {
        let switch = if self.on {
            "(\u{b7}\u{b7}\u{25cf}) on"
        } else {
            "(\u{25cf}\u{b7}\u{b7}) off"
        };
        vec![format!("{}  {switch}", self.label)]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_by_default() {
        let toggle = Toggle::new("On or off?", "switch");
        assert!(!toggle.is_on());
        let lines = toggle.render(40);
        assert_eq!(lines, vec!["On or off?  (\u{25cf}\u{b7}\u{b7}) off"]);
    }

    #[test]
    fn on_moves_the_knob() {
        let lines = Toggle::new("On or off?", "switch").on(true).render(40);
        assert_eq!(lines, vec!["On or off?  (\u{b7}\u{b7}\u{25cf}) on"]);
    }

    #[test]
    fn colors_are_cosmetic_only() {
        let plain = Toggle::new("l", "k").render(40);
        let tinted = Toggle::new("l", "k")
            .active_color("#ff0000")
            .inactive_color("#00ff00")
            .track_color("#0000ff")
            .render(40);
        assert_eq!(plain, tinted);
    }
}
