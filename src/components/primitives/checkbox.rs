//! Checkbox Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, Icon, IconName, h_flex};

/// Check indicator drawn in front of an option row
///
/// Purely visual: the row owning the checkbox handles clicks.
#[derive(IntoElement)]
pub struct Checkbox {
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
}

impl Checkbox {
    /// Create an unchecked checkbox
    pub fn new() -> Self {
        Self {
            checked: false,
            label: None,
            disabled: false,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let primary = cx.theme().primary;
        let primary_foreground = cx.theme().primary_foreground;
        let foreground = cx.theme().foreground;

        let (box_bg, box_border) = if checked {
            (primary, primary)
        } else {
            (gpui::transparent_black(), primary)
        };

        h_flex()
            .gap_2()
            .items_center()
            .when(self.disabled, |el| el.opacity(0.5))
            .child(
                div()
                    .size(px(16.0))
                    .flex_shrink_0()
                    .rounded_sm()
                    .border_1()
                    .border_color(box_border)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    // Unchecked boxes stay half-transparent
                    .when(!checked, |el| el.opacity(0.5))
                    .when(checked, |el| {
                        el.child(Icon::new(IconName::Check).size_3().text_color(primary_foreground))
                    }),
            )
            .when_some(self.label, |el, label| {
                el.child(div().text_sm().text_color(foreground).child(label))
            })
    }
}
