#![forbid(unsafe_code)]

//! The cooperative rerun driver.
//!
//! A [`Driver`] owns the [`SessionStore`], the bindings declared by the most
//! recent pass, and a FIFO input queue. Whenever a bound control's value
//! changes it reruns the entire view function top to bottom and presents the
//! produced document.
//!
//! # Ordering Contract
//!
//! For every input event, in order:
//!
//! 1. The event's raw value is stored under the control's own state key.
//! 2. If the previous pass declared a callback for that key, it runs now —
//!    callback-before-rerun, always.
//! 3. The view function reruns from the top. Bindings it declares replace
//!    the previous set wholesale.
//!
//! # Supersession
//!
//! The driver is single-threaded and cooperative: one rerun completes (or is
//! superseded) before the next begins. When [`drain`](Driver::drain) finds
//! another event already queued after a rerun, that rerun's document is
//! discarded and a fresh pass starts — only the last document of a burst is
//! presented, exactly as the render pipeline this mirrors coalesces frames.
//! Whatever the abandoned pass already wrote to the session store or a memo
//! cache stays committed.
//!
//! # Errors
//!
//! A view-function error aborts the pass and propagates; events still queued
//! remain queued for the caller to retry or drop.

use std::collections::VecDeque;

use thiserror::Error;
use web_time::Instant;

use sift_core::{DataError, InputEvent};

use crate::binding::{Binding, Bindings};
use crate::session::SessionStore;

pub type Result<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("view error: {message}")]
    View { message: String },
}

impl DriverError {
    #[must_use]
    pub fn view(message: impl Into<String>) -> Self {
        Self::View {
            message: message.into(),
        }
    }
}

/// What the view function sees during one pass.
///
/// Grants access to the persistent session store and collects the bindings
/// the pass declares.
pub struct ViewCtx<'a> {
    session: &'a mut SessionStore,
    bindings: &'a mut Bindings,
}

impl ViewCtx<'_> {
    /// The persistent session store.
    pub fn session(&mut self) -> &mut SessionStore {
        self.session
    }

    /// Declare a control binding for this pass.
    pub fn declare(&mut self, binding: Binding) {
        self.bindings.declare(binding);
    }
}

/// Outcome of draining the input queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<D> {
    /// The final pass of the burst produced this document.
    Rendered(D),
    /// A [`InputEvent::Quit`] ended the session; queued events were dropped.
    Quit,
}

/// Single-threaded rerun loop over a view function producing documents of
/// type `D`.
pub struct Driver<D> {
    session: SessionStore,
    bindings: Bindings,
    queue: VecDeque<InputEvent>,
    view: Box<dyn Fn(&mut ViewCtx<'_>) -> Result<D>>,
    reruns: u64,
}

impl<D> Driver<D> {
    /// Build a driver around a view function.
    pub fn new(view: impl Fn(&mut ViewCtx<'_>) -> Result<D> + 'static) -> Self {
        Self {
            session: SessionStore::new(),
            bindings: Bindings::new(),
            queue: VecDeque::new(),
            view: Box::new(view),
            reruns: 0,
        }
    }

    /// The persistent session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Mutable access to the session store (tests, state dump tooling).
    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Number of completed view passes.
    #[must_use]
    pub fn reruns(&self) -> u64 {
        self.reruns
    }

    /// Number of events waiting in the queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Enqueue an input event.
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Run one full view pass and return its document.
    ///
    /// Used for the initial render and by [`drain`]; bindings declared by
    /// the pass replace the previous set.
    pub fn rerun(&mut self) -> Result<D> {
        let started = Instant::now();
        self.bindings.clear();
        let mut ctx = ViewCtx {
            session: &mut self.session,
            bindings: &mut self.bindings,
        };
        let document = (self.view)(&mut ctx)?;
        self.reruns += 1;
        tracing::debug!(
            pass = self.reruns,
            bindings = self.bindings.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "view pass complete"
        );
        Ok(document)
    }

    /// Process the queue to empty, presenting only the final document.
    ///
    /// Each event triggers a complete pass; intermediate documents of a
    /// burst are discarded (their session and cache writes stay committed).
    pub fn drain(&mut self) -> Result<Outcome<D>> {
        let mut last = None;
        while let Some(event) = self.queue.pop_front() {
            if matches!(event, InputEvent::Quit) {
                let dropped = self.queue.len();
                if dropped > 0 {
                    tracing::debug!(dropped, "quit: dropping queued events");
                }
                self.queue.clear();
                return Ok(Outcome::Quit);
            }
            self.apply(&event);
            let document = self.rerun()?;
            if self.queue.is_empty() {
                last = Some(document);
            } else {
                tracing::debug!(?event, "pass superseded; document discarded");
            }
        }
        match last {
            Some(document) => Ok(Outcome::Rendered(document)),
            // Draining an empty queue is a plain refresh.
            None => Ok(Outcome::Rendered(self.rerun()?)),
        }
    }

    /// Enqueue one event and drain.
    pub fn run_once(&mut self, event: InputEvent) -> Result<Outcome<D>> {
        self.push(event);
        self.drain()
    }

    /// Store the event's raw value under its own key, then fire the
    /// callback declared by the previous pass, if any.
    fn apply(&mut self, event: &InputEvent) {
        let (Some(key), Some(value)) = (event.key(), event.value()) else {
            return;
        };
        self.session.set(key, value.clone());
        if let Some(binding) = self.bindings.get(key) {
            // Clone the handle so the callback can mutate the session.
            let binding = binding.clone();
            binding.fire(&mut self.session, &value);
        }
    }
}

impl<D> std::fmt::Debug for Driver<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("reruns", &self.reruns)
            .field("pending", &self.queue.len())
            .field("session_keys", &self.session.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
