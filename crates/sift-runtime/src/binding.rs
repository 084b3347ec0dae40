#![forbid(unsafe_code)]

//! Widget-to-state bindings.
//!
//! A [`Binding`] ties a control's state key to an optional on-change
//! callback. Bindings are declared from inside the view function and are
//! therefore rebuilt on every rerun; only the state key they write through
//! is persistent. Within one rerun the last declaration for a key wins.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use sift_core::Value;

use crate::session::SessionStore;

/// Callback invoked when a bound control's value changes.
///
/// Receives the session store and the control's new value. The driver
/// guarantees the callback runs after the raw value is stored under the
/// control's own key and before the rerun that observes its effect.
pub type OnChange = Rc<dyn Fn(&mut SessionStore, &Value)>;

/// Association between a control's state key and its change callback.
#[derive(Clone)]
pub struct Binding {
    key: String,
    on_change: Option<OnChange>,
}

impl Binding {
    /// A binding for `key` with no callback.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            on_change: None,
        }
    }

    /// Attach an on-change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl Fn(&mut SessionStore, &Value) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    /// The bound state key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Run the callback, if one is attached.
    pub fn fire(&self, session: &mut SessionStore, value: &Value) {
        if let Some(callback) = &self.on_change {
            tracing::trace!(key = %self.key, %value, "binding callback");
            callback(session, value);
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

/// The set of bindings declared by the most recent rerun.
#[derive(Debug, Default)]
pub struct Bindings {
    by_key: AHashMap<String, Binding>,
}

impl Bindings {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding. A later declaration for the same key replaces
    /// the earlier one.
    pub fn declare(&mut self, binding: Binding) {
        self.by_key.insert(binding.key.clone(), binding);
    }

    /// Look up the binding for a state key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Binding> {
        self.by_key.get(key)
    }

    /// Drop every declared binding (start of a fresh rerun).
    pub fn clear(&mut self) {
        self.by_key.clear();
    }

    /// Number of declared bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether no binding is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
