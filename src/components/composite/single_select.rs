//! SingleSelect Component
//!
//! Trigger showing the selected label and a popover list with a check mark
//! on the selected row. Search is local (label or key) unless the caller
//! takes it over, and the list pages in more options near its bottom.

use std::time::Instant;

use gpui::{
    App, AppContext, Bounds, Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable, IntoElement,
    ParentElement,
    Pixels, Render, ScrollWheelEvent, SharedString, Styled, Subscription, Task, Window, canvas, div,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable, h_flex,
    input::{Input, InputEvent, InputState},
};
use tracing::debug;

use super::command_list::{CommandItem, CommandList, WheelHandler, row_top};
use super::infinite_scroll::InfiniteScroll;
use super::SingleSelectEvent;
use crate::assets::CustomIconName;
use crate::components::primitives::Popover;
use crate::constants::{LIST_MAX_HEIGHT, POPOVER_WIDTH, ROW_HEIGHT, TRIGGER_MIN_WIDTH};
use crate::domain::{OptionAccessors, SelectValue};
use crate::helpers::{SELECT_KEY_CONTEXT, SelectAction};
use crate::i18n::{Locale, t};
use crate::states::{Highlight, PaginationSignal, SearchState, SingleSelection, WheelPolicy, filter_options};

/// Single-select dropdown
pub struct SingleSelect<T: Clone + 'static, K: SelectValue> {
    id: ElementId,
    focus_handle: FocusHandle,
    options: Vec<T>,
    accessors: OptionAccessors<T, K>,
    selection: SingleSelection<K>,
    search: SearchState,
    search_input: Option<Entity<InputState>>,
    highlight: Highlight,
    scroll: InfiniteScroll,
    open: bool,
    trigger_bounds: Bounds<Pixels>,
    debounce_task: Option<Task<()>>,

    placeholder: Option<SharedString>,
    search_placeholder: Option<SharedString>,
    empty_message: Option<SharedString>,
    default_display_value: Option<SharedString>,
    modal_popover: bool,
    disabled: bool,
    width: Option<Pixels>,
    popover_width: Pixels,
    list_max_height: Pixels,

    _subscriptions: Vec<Subscription>,
}

impl<T: Clone + 'static, K: SelectValue> SingleSelect<T, K> {
    /// Create a single-select over `options`
    pub fn new(
        id: impl Into<ElementId>,
        options: Vec<T>,
        accessors: OptionAccessors<T, K>,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            id: id.into(),
            focus_handle: cx.focus_handle(),
            options,
            accessors,
            selection: SingleSelection::default(),
            search: SearchState::new(false),
            search_input: None,
            highlight: Highlight::default(),
            scroll: InfiniteScroll::new(WheelPolicy::BubbleAtEdges),
            open: false,
            trigger_bounds: Bounds::default(),
            debounce_task: None,
            placeholder: None,
            search_placeholder: None,
            empty_message: None,
            default_display_value: None,
            modal_popover: false,
            disabled: false,
            width: None,
            popover_width: px(POPOVER_WIDTH),
            list_max_height: px(LIST_MAX_HEIGHT),
            _subscriptions: Vec::new(),
        }
    }

    // ==================== Builder ====================

    pub fn with_value(mut self, value: Option<K>) -> Self {
        self.selection = SingleSelection::new(value);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Label shown while the selected option is not among the loaded options
    pub fn with_default_display_value(mut self, display: impl Into<SharedString>) -> Self {
        self.default_display_value = Some(display.into());
        self
    }

    pub fn with_modal_popover(mut self, modal: bool) -> Self {
        self.modal_popover = modal;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_width(mut self, width: Pixels) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_popover_width(mut self, width: Pixels) -> Self {
        self.popover_width = width;
        self
    }

    pub fn with_list_max_height(mut self, height: Pixels) -> Self {
        self.list_max_height = height;
        self
    }

    pub fn with_wheel_policy(mut self, policy: WheelPolicy) -> Self {
        self.scroll.set_policy(policy);
        self
    }

    pub fn with_pagination(self, signal: PaginationSignal) -> Self {
        self.scroll.set_signal(signal);
        self
    }

    /// Let the caller filter the options; the term arrives debounced as
    /// [`SingleSelectEvent::SearchChange`]
    pub fn with_delegated_search(mut self, delegated: bool) -> Self {
        self.search.set_delegated(delegated);
        self
    }

    // ==================== Getters ====================

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn value(&self) -> Option<&K> {
        self.selection.value()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // ==================== Setters ====================

    /// Mirror the caller's value
    pub fn set_value(&mut self, value: Option<K>, cx: &mut Context<Self>) {
        self.selection.set(value);
        cx.notify();
    }

    pub fn set_options(&mut self, options: Vec<T>, cx: &mut Context<Self>) {
        self.options = options;
        self.highlight.clamp(self.visible_indices().len());
        cx.notify();
    }

    pub fn set_pagination(&mut self, signal: PaginationSignal, cx: &mut Context<Self>) {
        self.scroll.set_signal(signal);
        cx.notify();
    }

    pub fn set_default_display_value(&mut self, display: Option<SharedString>, cx: &mut Context<Self>) {
        self.default_display_value = display;
        cx.notify();
    }

    pub fn set_modal_popover(&mut self, modal: bool, cx: &mut Context<Self>) {
        self.modal_popover = modal;
        cx.notify();
    }

    /// Disabling closes an open popover
    pub fn set_disabled(&mut self, disabled: bool, window: &mut Window, cx: &mut Context<Self>) {
        self.disabled = disabled;
        if disabled {
            self.close_popover(window, cx);
        }
        cx.notify();
    }

    // ==================== Selection ====================

    /// Select `value`, or clear it when it is already selected
    pub fn choose(&mut self, value: K, window: &mut Window, cx: &mut Context<Self>) {
        let choice = self.selection.choose(value);
        debug!(id = ?self.id, cleared = choice.value().is_none(), "Option chosen");
        cx.emit(SingleSelectEvent::from(&choice));
        if choice.closes_popover() {
            self.close_popover(window, cx);
        }
        cx.notify();
    }

    // ==================== Popover ====================

    fn search_input(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Entity<InputState> {
        if let Some(input) = &self.search_input {
            return input.clone();
        }
        let placeholder = self
            .search_placeholder
            .clone()
            .unwrap_or_else(|| t(Locale::current(cx), "select-search"));
        let input = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));
        self._subscriptions
            .push(cx.subscribe_in(&input, window, Self::on_input_event));
        self.search_input = Some(input.clone());
        input
    }

    pub fn open_popover(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.open || self.disabled {
            return;
        }
        let input = self.search_input(window, cx);
        self.open = true;
        self.search.open();
        self.highlight.reset();
        self.scroll.begin_settle(cx, |this| &mut this.scroll);
        window.focus(&input.focus_handle(cx));
        debug!(id = ?self.id, "Popover opened");
        cx.notify();
    }

    /// Close and reset the search text
    pub fn close_popover(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.open {
            return;
        }
        self.open = false;
        self.debounce_task = None;
        self.highlight.reset();
        self.scroll.detach();
        let cleared = self.search.close();
        if let Some(input) = &self.search_input {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
        if let Some(term) = cleared {
            cx.emit(SingleSelectEvent::SearchChange(term));
        }
        window.focus(&self.focus_handle);
        debug!(id = ?self.id, "Popover closed");
        cx.notify();
    }

    fn toggle_popover(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.open {
            self.close_popover(window, cx);
        } else {
            self.open_popover(window, cx);
        }
    }

    // ==================== Search ====================

    fn on_input_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            InputEvent::Change => {
                let text = state.read(cx).value().to_string();
                if let Some(due) = self.search.input(text, Instant::now()) {
                    let delay = self.search.delay();
                    self.debounce_task = Some(cx.spawn(async move |this, cx| {
                        cx.background_executor().timer(delay).await;
                        let _ = this.update(cx, |this, cx| this.flush_search(due, cx));
                    }));
                }
            }
            InputEvent::PressEnter { .. } => self.confirm_highlight(window, cx),
            _ => {}
        }
    }

    fn flush_search(&mut self, due: Instant, cx: &mut Context<Self>) {
        let Some(settled) = self.search.flush(due) else {
            return;
        };
        // The local filter follows the settled term
        self.highlight.reset();
        if settled.notify {
            cx.emit(SingleSelectEvent::SearchChange(settled.term));
        }
        cx.notify();
    }

    fn visible_indices(&self) -> Vec<usize> {
        filter_options(
            &self.options,
            &self.accessors,
            self.search.term(),
            self.search.is_delegated(),
        )
    }

    // ==================== Scrolling ====================

    fn on_list_wheel(&mut self, event: &ScrollWheelEvent, window: &mut Window, cx: &mut Context<Self>) {
        if !self.scroll.is_attached() {
            return;
        }
        if self.scroll.apply_wheel(event, window.line_height()) {
            cx.stop_propagation();
            self.load_more_if_needed(cx);
            cx.notify();
        }
    }

    fn load_more_if_needed(&mut self, cx: &mut Context<Self>) {
        if self.scroll.should_load(self.open) {
            debug!(id = ?self.id, "Load more");
            cx.emit(SingleSelectEvent::LoadMore);
        }
    }

    // ==================== Keyboard ====================

    fn on_select_action(&mut self, action: &SelectAction, window: &mut Window, cx: &mut Context<Self>) {
        match action {
            SelectAction::Up | SelectAction::Down if self.open => {
                let len = self.visible_indices().len();
                let row = if *action == SelectAction::Down {
                    self.highlight.next(len)
                } else {
                    self.highlight.prev(len)
                };
                if let Some(row) = row {
                    self.scroll.reveal_row(row_top(0, row), ROW_HEIGHT);
                    self.load_more_if_needed(cx);
                }
                cx.notify();
            }
            SelectAction::Confirm if !self.open => self.open_popover(window, cx),
            SelectAction::Confirm => {
                // The focused search field reports Enter itself
                let input_focused = self
                    .search_input
                    .as_ref()
                    .is_some_and(|input| input.focus_handle(cx).is_focused(window));
                if !input_focused {
                    self.confirm_highlight(window, cx);
                }
            }
            SelectAction::Cancel => self.close_popover(window, cx),
            _ => cx.propagate(),
        }
    }

    fn confirm_highlight(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(row) = self.highlight.index() else {
            return;
        };
        let value = self
            .visible_indices()
            .get(row)
            .and_then(|ix| self.options.get(*ix))
            .map(|option| self.accessors.value(option));
        if let Some(value) = value {
            self.choose(value, window, cx);
        }
    }

    // ==================== Rendering ====================

    fn render_trigger(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = Locale::current(cx);
        let border = cx.theme().border;
        let background = cx.theme().background;
        let foreground = cx.theme().foreground;
        let muted_foreground = cx.theme().muted_foreground;
        let view = cx.weak_entity();

        let placeholder = self
            .placeholder
            .clone()
            .unwrap_or_else(|| t(locale, "select-single-placeholder"));
        let (label, has_value) = self.selection.display_label(
            &self.options,
            &self.accessors,
            self.default_display_value.as_ref(),
            &placeholder,
        );

        h_flex()
            .id("trigger")
            .relative()
            .h(px(36.0))
            .min_w(px(TRIGGER_MIN_WIDTH))
            .when_some(self.width, |el, width| el.w(width))
            .px_3()
            .gap_2()
            .justify_between()
            .rounded_md()
            .border_1()
            .border_color(border)
            .bg(background)
            .text_sm()
            .map(|el| {
                if self.disabled {
                    el.opacity(0.5).cursor_not_allowed()
                } else {
                    el.cursor_pointer()
                        .on_click(cx.listener(|this, _, window, cx| this.toggle_popover(window, cx)))
                }
            })
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .text_ellipsis()
                    .text_color(if has_value { foreground } else { muted_foreground })
                    .child(label),
            )
            .child(
                Icon::from(CustomIconName::ChevronsUpDown)
                    .size_4()
                    .text_color(muted_foreground),
            )
            .child(
                canvas(
                    move |bounds, _, cx| {
                        let _ = view.update(cx, |this, _| this.trigger_bounds = bounds);
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .size_full(),
            )
    }

    fn render_popover(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = Locale::current(cx);
        let muted_foreground = cx.theme().muted_foreground;
        let highlighted = self.highlight.index();

        let rows: Vec<_> = self
            .visible_indices()
            .into_iter()
            .enumerate()
            .filter_map(|(row, ix)| self.options.get(ix).map(|option| (row, ix, option)))
            .map(|(row, ix, option)| {
                let value = self.accessors.value(option);
                let selected = self.selection.is_selected(&value);
                let icon = self
                    .accessors
                    .icon(option)
                    .map(|icon| icon.size_4().text_color(muted_foreground));
                CommandItem::new(("option", ix))
                    .highlighted(highlighted == Some(row))
                    .on_click(cx.listener(move |this, _, window, cx| {
                        this.choose(value.clone(), window, cx);
                    }))
                    .child(
                        div()
                            .size_4()
                            .flex_shrink_0()
                            .when(selected, |el| el.child(Icon::new(IconName::Check).size_4())),
                    )
                    .child(h_flex().gap_2().children(icon).child(self.accessors.label(option)))
            })
            .collect();

        let on_wheel = self
            .scroll
            .is_attached()
            .then(|| Box::new(cx.listener(Self::on_list_wheel)) as WheelHandler);
        let loading = self
            .scroll
            .signal()
            .is_fetching_next_page
            .then(|| t(locale, "select-loading"));
        let empty_message = self
            .empty_message
            .clone()
            .unwrap_or_else(|| t(locale, "select-empty"));

        let mut list = CommandList::new("options", self.scroll.handle())
            .rows(rows)
            .empty_message(empty_message)
            .loading(loading)
            .max_height(self.list_max_height)
            .on_wheel(on_wheel);
        if let Some(input) = &self.search_input {
            list = list.search(
                Input::new(input)
                    .small()
                    .prefix(Icon::new(IconName::Search).small().text_color(muted_foreground)),
            );
        }

        let view = cx.weak_entity();
        Popover::new(self.trigger_bounds)
            .modal(self.modal_popover)
            .width(self.popover_width)
            .on_dismiss(move |window, cx| {
                let _ = view.update(cx, |this, cx| this.close_popover(window, cx));
            })
            .child(list)
    }
}

impl<T: Clone + 'static, K: SelectValue> EventEmitter<SingleSelectEvent<K>> for SingleSelect<T, K> {}

impl<T: Clone + 'static, K: SelectValue> Focusable for SingleSelect<T, K> {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl<T: Clone + 'static, K: SelectValue> Render for SingleSelect<T, K> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id(self.id.clone())
            .key_context(SELECT_KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_select_action))
            .child(self.render_trigger(cx))
            .when(self.open, |el| el.child(self.render_popover(cx)))
    }
}
