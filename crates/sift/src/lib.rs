#![forbid(unsafe_code)]

//! sift public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users.

pub mod prelude {
    pub use sift_core as core;
    pub use sift_runtime as runtime;
    pub use sift_widgets as widgets;
}
