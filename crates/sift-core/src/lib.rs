#![forbid(unsafe_code)]

//! Data model and input events for sift.
//!
//! This crate owns the pieces with no opinion about rendering or reactivity:
//! typed cell values, the immutable [`Table`], the delimited dataset loader,
//! the error taxonomy, and the canonical [`InputEvent`] type.

pub mod dataset;
pub mod error;
pub mod event;
pub mod table;
pub mod value;

pub use dataset::{CsvOptions, load_path, load_str};
pub use error::{DataError, Result};
pub use event::InputEvent;
pub use table::Table;
pub use value::Value;
