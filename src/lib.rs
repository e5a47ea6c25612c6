//! DFC Select Library
//!
//! Multi-select and single-select dropdown components for GPUI, with
//! debounced search, select all, overflow badges and infinite scroll.
//!
//! Call [`init`] once at startup, after which [`MultiSelect`] and
//! [`SingleSelect`] entities can be created in any window. Selects report
//! through [`MultiSelectEvent`] and [`SingleSelectEvent`]; subscribe with
//! `cx.subscribe` and update the select freely from the handler.

use gpui::App;

pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod helpers;
pub mod i18n;
pub mod states;

pub use components::{BadgeVariant, MultiSelect, MultiSelectEvent, SingleSelect, SingleSelectEvent};
pub use domain::{OptionAccessors, SelectValue};
pub use states::{PaginationSignal, WheelPolicy};

/// Initialize gpui-component and register the select key bindings
pub fn init(cx: &mut App) {
    gpui_component::init(cx);
    cx.bind_keys(helpers::select_key_bindings());
}
