//! Badge Component
//!
//! Pill shown on the multi-select trigger for each visible selection and for
//! the "+N more" overflow marker.

use std::time::Duration;

use gpui::{
    Animation, AnimationExt, App, ClickEvent, ElementId, Hsla, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, bounce, div, ease_in_out, prelude::*,
};
use gpui_component::{ActiveTheme, Icon, IconName, Theme, h_flex};

/// Visual style of a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Inverted,
}

impl BadgeVariant {
    /// Background and foreground colors for this variant
    fn colors(&self, theme: &Theme) -> (Hsla, Hsla) {
        match self {
            BadgeVariant::Default => (theme.primary, theme.primary_foreground),
            BadgeVariant::Secondary => (theme.secondary, theme.secondary_foreground),
            BadgeVariant::Destructive => (theme.danger, theme.danger_foreground),
            BadgeVariant::Inverted => (theme.foreground, theme.background),
        }
    }
}

type RemoveHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A removable pill
#[derive(IntoElement)]
pub struct Badge {
    id: ElementId,
    label: SharedString,
    icon: Option<Icon>,
    variant: BadgeVariant,
    pulse: Option<Duration>,
    on_remove: Option<RemoveHandler>,
}

impl Badge {
    /// Create a badge
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: BadgeVariant::default(),
            pulse: None,
            on_remove: None,
        }
    }

    /// Leading icon
    pub fn icon(mut self, icon: Option<Icon>) -> Self {
        self.icon = icon;
        self
    }

    /// Set the variant
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Pulse continuously with the given period
    pub fn pulse(mut self, period: Option<Duration>) -> Self {
        self.pulse = period.filter(|period| !period.is_zero());
        self
    }

    /// Show a remove button calling `handler`
    pub fn on_remove(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_remove = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (bg, fg) = self.variant.colors(cx.theme());
        let border = cx.theme().border;

        let badge = h_flex()
            .id(self.id.clone())
            .gap_1()
            .px_2()
            .py_px()
            .rounded_md()
            .border_1()
            .border_color(if self.variant == BadgeVariant::Secondary { border } else { bg })
            .bg(bg)
            .text_color(fg)
            .text_xs()
            .when_some(self.icon, |el, icon| el.child(icon.size_3()))
            .child(self.label)
            .when_some(self.on_remove, |el, handler| {
                el.child(
                    div()
                        .id("remove")
                        .cursor_pointer()
                        .opacity(0.8)
                        .hover(|style| style.opacity(1.0))
                        .on_click(move |event, window, cx| {
                            cx.stop_propagation();
                            handler(event, window, cx);
                        })
                        .child(Icon::new(IconName::CircleX).size_3()),
                )
            });

        match self.pulse {
            Some(period) => badge
                .with_animation(
                    self.id,
                    Animation::new(period).repeat().with_easing(bounce(ease_in_out)),
                    |el, delta| el.opacity(0.6 + 0.4 * delta),
                )
                .into_any_element(),
            None => badge.into_any_element(),
        }
    }
}
