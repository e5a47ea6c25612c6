//! Primitive Components
//!
//! Small building blocks shared by the select components.

pub mod badge;
pub mod checkbox;
pub mod popover;

pub use badge::{Badge, BadgeVariant};
pub use checkbox::Checkbox;
pub use popover::Popover;
