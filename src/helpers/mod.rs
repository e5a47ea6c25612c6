//! Helper Utilities
//!
//! Common utilities used across the crate.

mod action;
mod debounce;
mod fs;
mod latest;

pub use action::*;
pub use debounce::*;
pub use fs::*;
pub use latest::*;
