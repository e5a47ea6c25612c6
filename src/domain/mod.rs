//! Domain Models
//!
//! Option accessors and matching rules shared by both select components.

pub mod option;

pub use option::{OptionAccessors, SelectValue, contains_ignore_case, fuzzy_contains};
