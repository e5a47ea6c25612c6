//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O.

pub mod composite;
pub mod primitives;

pub use composite::{MultiSelect, MultiSelectEvent, SingleSelect, SingleSelectEvent};
pub use primitives::BadgeVariant;
