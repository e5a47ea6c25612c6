//! CommandList Component
//!
//! Searchable option list rendered inside a select popover: optional search
//! slot, scrollable rows, empty state, loading row and footer.

use gpui::{
    AnyElement, App, ClickEvent, ElementId, IntoElement, ParentElement, Pixels, RenderOnce, ScrollHandle,
    ScrollWheelEvent, SharedString, Styled, Window, div, prelude::*, px,
};
use gpui_component::{ActiveTheme, Icon, IconName, h_flex, label::Label, v_flex};

use crate::constants::{LIST_MAX_HEIGHT, ROW_HEIGHT};

/// Padding around the rows inside the scroll area
const LIST_PADDING: f32 = 4.0;

/// Top of a row in content coordinates, counting header rows before it
pub fn row_top(header_rows: usize, row: usize) -> f32 {
    LIST_PADDING + (header_rows + row) as f32 * ROW_HEIGHT
}

pub type WheelHandler = Box<dyn Fn(&ScrollWheelEvent, &mut Window, &mut App) + 'static>;
type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// One selectable row of a [`CommandList`]
#[derive(IntoElement)]
pub struct CommandItem {
    id: ElementId,
    highlighted: bool,
    children: Vec<AnyElement>,
    on_click: Option<ClickHandler>,
}

impl CommandItem {
    /// Create a row
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            highlighted: false,
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Keyboard highlight
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for CommandItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let accent = cx.theme().accent;
        let accent_foreground = cx.theme().accent_foreground;

        h_flex()
            .id(self.id)
            .h(px(ROW_HEIGHT))
            .flex_shrink_0()
            .w_full()
            .px_2()
            .gap_2()
            .rounded_sm()
            .text_sm()
            .cursor_pointer()
            .when(self.highlighted, |el| el.bg(accent).text_color(accent_foreground))
            .hover(|style| style.bg(accent).text_color(accent_foreground))
            .children(self.children)
            .when_some(self.on_click, |el, handler| el.on_click(handler))
    }
}

/// Option list with search, empty and loading states
#[derive(IntoElement)]
pub struct CommandList {
    id: ElementId,
    scroll_handle: ScrollHandle,
    search: Option<AnyElement>,
    header: Vec<AnyElement>,
    rows: Vec<AnyElement>,
    empty_message: SharedString,
    loading_message: Option<SharedString>,
    footer: Option<AnyElement>,
    max_height: Pixels,
    on_wheel: Option<WheelHandler>,
}

impl CommandList {
    /// Create a list scrolled through `scroll_handle`
    pub fn new(id: impl Into<ElementId>, scroll_handle: &ScrollHandle) -> Self {
        Self {
            id: id.into(),
            scroll_handle: scroll_handle.clone(),
            search: None,
            header: Vec::new(),
            rows: Vec::new(),
            empty_message: SharedString::default(),
            loading_message: None,
            footer: None,
            max_height: px(LIST_MAX_HEIGHT),
            on_wheel: None,
        }
    }

    /// Search input placed above the rows
    pub fn search(mut self, search: impl IntoElement) -> Self {
        self.search = Some(search.into_any_element());
        self
    }

    /// Row placed before the options, hidden together with them
    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header.push(header.into_any_element());
        self
    }

    /// Option rows
    pub fn rows(mut self, rows: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.rows.extend(rows.into_iter().map(IntoElement::into_any_element));
        self
    }

    /// Message shown when there are no rows
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Show a loading row with this message
    pub fn loading(mut self, message: Option<SharedString>) -> Self {
        self.loading_message = message;
        self
    }

    /// Footer below the rows
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Height limit of the scroll area
    pub fn max_height(mut self, max_height: Pixels) -> Self {
        self.max_height = max_height;
        self
    }

    /// Wheel handler on the list content; runs before the native scroll
    pub fn on_wheel(mut self, handler: Option<WheelHandler>) -> Self {
        self.on_wheel = handler;
        self
    }

    fn render_loading(message: SharedString, cx: &App) -> impl IntoElement {
        h_flex()
            .h(px(ROW_HEIGHT))
            .flex_shrink_0()
            .w_full()
            .gap_2()
            .justify_center()
            .child(Icon::new(IconName::Loader).size_4())
            .child(Label::new(message).text_sm().text_color(cx.theme().muted_foreground))
    }
}

impl RenderOnce for CommandList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let border = cx.theme().border;
        let muted_foreground = cx.theme().muted_foreground;

        let body = if self.rows.is_empty() {
            match self.loading_message {
                Some(message) => Self::render_loading(message, cx).into_any_element(),
                None => div()
                    .py_6()
                    .w_full()
                    .text_center()
                    .text_sm()
                    .text_color(muted_foreground)
                    .child(self.empty_message)
                    .into_any_element(),
            }
        } else {
            let loading = self
                .loading_message
                .map(|message| Self::render_loading(message, cx));

            div()
                .id(self.id)
                .max_h(self.max_height)
                .overflow_y_scroll()
                .track_scroll(&self.scroll_handle)
                .child(
                    v_flex()
                        .p(px(LIST_PADDING))
                        .when_some(self.on_wheel, |el, handler| el.on_scroll_wheel(handler))
                        .children(self.header)
                        .children(self.rows)
                        .children(loading),
                )
                .into_any_element()
        };

        v_flex()
            .w_full()
            .when_some(self.search, |el, search| {
                el.child(div().w_full().p_1().border_b_1().border_color(border).child(search))
            })
            .child(body)
            .when_some(self.footer, |el, footer| {
                el.child(div().w_full().p_1().border_t_1().border_color(border).child(footer))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_top_counts_header_rows() {
        assert_eq!(row_top(0, 0), LIST_PADDING);
        assert_eq!(row_top(1, 0), LIST_PADDING + ROW_HEIGHT);
        assert_eq!(row_top(1, 2), LIST_PADDING + 3.0 * ROW_HEIGHT);
    }
}
