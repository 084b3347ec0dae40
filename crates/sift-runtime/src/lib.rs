#![forbid(unsafe_code)]

//! Reactive mechanics for sift.
//!
//! This crate provides the state that outlives a view pass and the loop that
//! schedules passes:
//!
//! - [`SessionStore`]: per-session key-value state, seeded lazily, surviving
//!   every rerun.
//! - [`Memo`]: argument-keyed caching for pure query functions.
//! - [`Binding`]: the association between a control's state key and its
//!   on-change callback, re-declared each pass.
//! - [`Driver`]: the single-threaded cooperative loop — store the event
//!   value, fire the callback, rerun the view top to bottom, coalesce
//!   superseded documents.
//!
//! Everything here is single-threaded by design; there is no locking because
//! there is no concurrent mutation.

pub mod binding;
pub mod driver;
pub mod memo;
pub mod session;

pub use binding::{Binding, Bindings, OnChange};
pub use driver::{Driver, DriverError, Outcome, Result, ViewCtx};
pub use memo::Memo;
pub use session::SessionStore;
