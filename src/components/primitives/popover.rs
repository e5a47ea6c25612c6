//! Popover Component
//!
//! Floating panel anchored under a trigger. Modal popovers lay a backdrop
//! over the window that swallows clicks and dismisses; non-modal popovers
//! dismiss on any mouse-down outside the panel except on the trigger, which
//! toggles on its own.

use gpui::{
    AnyElement, App, Bounds, IntoElement, MouseButton, ParentElement, Pixels, RenderOnce, Styled, Window,
    anchored, deferred, div, point, prelude::*, px,
};
use gpui_component::{ActiveTheme, v_flex};

use crate::constants::{POPOVER_OFFSET, POPOVER_WIDTH, POPOVER_WINDOW_MARGIN};

type DismissHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Popover component
#[derive(IntoElement)]
pub struct Popover {
    anchor: Bounds<Pixels>,
    modal: bool,
    width: Pixels,
    children: Vec<AnyElement>,
    on_dismiss: Option<DismissHandler>,
}

impl Popover {
    /// Create a popover below `anchor`
    pub fn new(anchor: Bounds<Pixels>) -> Self {
        Self {
            anchor,
            modal: false,
            width: px(POPOVER_WIDTH),
            children: Vec::new(),
            on_dismiss: None,
        }
    }

    /// Lay a backdrop over the rest of the window
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    /// Panel width; never narrower than the anchor
    pub fn width(mut self, width: Pixels) -> Self {
        self.width = width;
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Called when the user clicks away
    pub fn on_dismiss(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Popover {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let anchor = self.anchor;
        let width = if self.width > anchor.size.width {
            self.width
        } else {
            anchor.size.width
        };
        let on_dismiss = self.on_dismiss.map(std::rc::Rc::new);

        let panel = v_flex()
            .id("popover-panel")
            .occlude()
            .w(width)
            .bg(cx.theme().popover)
            .text_color(cx.theme().popover_foreground)
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .shadow_lg()
            .overflow_hidden()
            .children(self.children)
            .when(!self.modal, |el| {
                el.when_some(on_dismiss.clone(), |el, handler| {
                    el.on_mouse_down_out(move |event, window, cx| {
                        if !anchor.contains(&event.position) {
                            handler(window, cx);
                        }
                    })
                })
            });

        let backdrop = self.modal.then(|| {
            let viewport = window.viewport_size();
            deferred(
                anchored().position(point(px(0.), px(0.))).child(
                    div()
                        .id("popover-backdrop")
                        .occlude()
                        .w(viewport.width)
                        .h(viewport.height)
                        .when_some(on_dismiss, |el, handler| {
                            el.on_mouse_down(MouseButton::Left, move |_, window, cx| {
                                handler(window, cx);
                            })
                        }),
                ),
            )
            .with_priority(1)
        });

        div()
            .children(backdrop)
            .child(
                deferred(
                    anchored()
                        .position(anchor.bottom_left() + point(px(0.), px(POPOVER_OFFSET)))
                        .snap_to_window_with_margin(px(POPOVER_WINDOW_MARGIN))
                        .child(panel),
                )
                .with_priority(2),
            )
    }
}
