//! MultiSelect Component
//!
//! Trigger with one badge per selected option (up to `max_count`, then a
//! "+N more" badge), and a popover list with search, select all, and
//! infinite scroll.

use std::time::Instant;

use gpui::{
    App, AppContext, Bounds, Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable, IntoElement,
    KeystrokeEvent,
    ParentElement, Pixels, Render, ScrollWheelEvent, SharedString, Styled, Subscription, Task, Window, canvas,
    div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
};
use tracing::debug;

use super::command_list::{CommandItem, CommandList, WheelHandler, row_top};
use super::infinite_scroll::InfiniteScroll;
use super::MultiSelectEvent;
use crate::assets::CustomIconName;
use crate::components::primitives::{Badge, BadgeVariant, Checkbox, Popover};
use crate::constants::{DEFAULT_MAX_COUNT, LIST_MAX_HEIGHT, POPOVER_WIDTH, ROW_HEIGHT, TRIGGER_MIN_WIDTH};
use crate::domain::{OptionAccessors, SelectValue};
use crate::helpers::{SELECT_KEY_CONTEXT, SelectAction};
use crate::i18n::{Locale, t, t_count};
use crate::states::{
    Highlight, MultiSelection, PaginationSignal, SearchState, WheelPolicy, clamp_animation, filter_fuzzy,
    pulse_period,
};

/// The "(Select All)" row sits above the options
const HEADER_ROWS: usize = 1;

/// Multi-select dropdown
pub struct MultiSelect<T: Clone + 'static, K: SelectValue> {
    id: ElementId,
    focus_handle: FocusHandle,
    options: Vec<T>,
    accessors: OptionAccessors<T, K>,
    selection: MultiSelection<T>,
    search: SearchState,
    search_input: Option<Entity<InputState>>,
    highlight: Highlight,
    scroll: InfiniteScroll,
    open: bool,
    trigger_bounds: Bounds<Pixels>,
    debounce_task: Option<Task<()>>,
    is_animating: bool,

    // Appearance
    placeholder: Option<SharedString>,
    search_placeholder: Option<SharedString>,
    empty_message: Option<SharedString>,
    max_count: usize,
    modal_popover: bool,
    animation: f32,
    variant: BadgeVariant,
    disabled: bool,
    width: Option<Pixels>,
    popover_width: Pixels,
    list_max_height: Pixels,

    _subscriptions: Vec<Subscription>,
}

impl<T: Clone + 'static, K: SelectValue> MultiSelect<T, K> {
    /// Create a multi-select over `options`
    pub fn new(
        id: impl Into<ElementId>,
        options: Vec<T>,
        accessors: OptionAccessors<T, K>,
        cx: &mut Context<Self>,
    ) -> Self {
        let view = cx.weak_entity();
        let backspace = cx.intercept_keystrokes(move |event: &KeystrokeEvent, window, cx| {
            if event.keystroke.key == "backspace" {
                let _ = view.update(cx, |this, cx| this.on_backspace(window, cx));
            }
        });

        Self {
            id: id.into(),
            focus_handle: cx.focus_handle(),
            options,
            accessors,
            selection: MultiSelection::default(),
            search: SearchState::new(false),
            search_input: None,
            highlight: Highlight::default(),
            scroll: InfiniteScroll::new(WheelPolicy::Intercept),
            open: false,
            trigger_bounds: Bounds::default(),
            debounce_task: None,
            is_animating: true,
            placeholder: None,
            search_placeholder: None,
            empty_message: None,
            max_count: DEFAULT_MAX_COUNT,
            modal_popover: false,
            animation: 0.0,
            variant: BadgeVariant::default(),
            disabled: false,
            width: None,
            popover_width: px(POPOVER_WIDTH),
            list_max_height: px(LIST_MAX_HEIGHT),
            _subscriptions: vec![backspace],
        }
    }

    // ==================== Builder ====================

    /// Initial selection; duplicate keys are dropped
    pub fn with_default_selected(mut self, selected: Vec<T>) -> Self {
        self.selection = MultiSelection::new(selected, &self.accessors);
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

    /// Badges shown before collapsing into "+N more"
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Backdrop over the window while open
    pub fn with_modal_popover(mut self, modal: bool) -> Self {
        self.modal_popover = modal;
        self
    }

    /// Badge pulse period in seconds, 0 disables
    pub fn with_animation(mut self, seconds: f32) -> Self {
        self.animation = clamp_animation(seconds);
        self
    }

    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
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

    pub fn with_pagination(self, signal: PaginationSignal) -> Self {
        self.scroll.set_signal(signal);
        self
    }

    /// Let the caller filter the options; the term arrives debounced as
    /// [`MultiSelectEvent::SearchChange`]
    pub fn with_delegated_search(mut self, delegated: bool) -> Self {
        self.search.set_delegated(delegated);
        self
    }

    // ==================== Getters ====================

    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Selected options in selection order
    pub fn selected(&self) -> &[T] {
        self.selection.items()
    }

    /// Selected keys in selection order
    pub fn selected_values(&self) -> Vec<K> {
        self.selection.values(&self.accessors)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // ==================== Setters ====================

    /// Replace the options, e.g. after a search or a new page
    pub fn set_options(&mut self, options: Vec<T>, cx: &mut Context<Self>) {
        self.options = options;
        self.highlight.clamp(self.visible_indices().len());
        cx.notify();
    }

    /// Update the caller's pagination flags
    pub fn set_pagination(&mut self, signal: PaginationSignal, cx: &mut Context<Self>) {
        self.scroll.set_signal(signal);
        cx.notify();
    }

    /// Replace the selection without reporting it
    pub fn set_selected(&mut self, selected: Vec<T>, cx: &mut Context<Self>) {
        self.selection.replace(selected, &self.accessors);
        cx.notify();
    }

    pub fn set_max_count(&mut self, max_count: usize, cx: &mut Context<Self>) {
        self.max_count = max_count;
        cx.notify();
    }

    pub fn set_animation(&mut self, seconds: f32, cx: &mut Context<Self>) {
        self.animation = clamp_animation(seconds);
        cx.notify();
    }

    pub fn set_modal_popover(&mut self, modal: bool, cx: &mut Context<Self>) {
        self.modal_popover = modal;
        cx.notify();
    }

    pub fn set_variant(&mut self, variant: BadgeVariant, cx: &mut Context<Self>) {
        self.variant = variant;
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

    fn commit(&mut self, cx: &mut Context<Self>) {
        debug!(id = ?self.id, count = self.selection.len(), "Selection changed");
        cx.emit(MultiSelectEvent::change(&self.selection, &self.accessors));
        cx.notify();
    }

    /// Add the option if absent, remove it if present
    pub fn toggle_option(&mut self, value: &K, cx: &mut Context<Self>) {
        let changed = if self.selection.remove(value, &self.accessors) {
            true
        } else if let Some(option) = self.accessors.find(&self.options, value) {
            self.selection.toggle(option, &self.accessors)
        } else {
            false
        };
        if changed {
            self.commit(cx);
        }
    }

    /// Select every option, or clear when all are selected
    pub fn toggle_all(&mut self, cx: &mut Context<Self>) {
        self.selection.toggle_all(&self.options, &self.accessors);
        self.commit(cx);
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.selection.clear();
        self.commit(cx);
    }

    /// Drop everything beyond the first `max_count` selections
    pub fn trim_overflow(&mut self, cx: &mut Context<Self>) {
        if self.selection.trim_to(self.max_count) {
            self.commit(cx);
        }
    }

    fn on_backspace(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(input) = self.search_input.as_ref() else {
            return;
        };
        if !self.open || !input.focus_handle(cx).is_focused(window) {
            return;
        }
        if input.read(cx).value().is_empty() && self.selection.pop_last().is_some() {
            self.commit(cx);
        }
    }

    fn toggle_animation(&mut self, cx: &mut Context<Self>) {
        self.is_animating = !self.is_animating;
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
            cx.emit(MultiSelectEvent::SearchChange(term));
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
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            InputEvent::Change => {
                let text = state.read(cx).value().to_string();
                self.on_search_input(text, cx);
            }
            InputEvent::PressEnter { .. } => self.confirm_highlight(cx),
            _ => {}
        }
    }

    fn on_search_input(&mut self, text: String, cx: &mut Context<Self>) {
        if let Some(due) = self.search.input(text, Instant::now()) {
            let delay = self.search.delay();
            self.debounce_task = Some(cx.spawn(async move |this, cx| {
                cx.background_executor().timer(delay).await;
                let _ = this.update(cx, |this, cx| this.flush_search(due, cx));
            }));
        }
        self.highlight.reset();
        cx.notify();
    }

    fn flush_search(&mut self, due: Instant, cx: &mut Context<Self>) {
        let Some(settled) = self.search.flush(due) else {
            return;
        };
        if settled.notify {
            cx.emit(MultiSelectEvent::SearchChange(settled.term));
        }
        cx.notify();
    }

    fn visible_indices(&self) -> Vec<usize> {
        filter_fuzzy(
            &self.options,
            &self.accessors,
            self.search.text(),
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
            cx.emit(MultiSelectEvent::LoadMore);
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
                    self.scroll.reveal_row(row_top(HEADER_ROWS, row), ROW_HEIGHT);
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
                    self.confirm_highlight(cx);
                }
            }
            SelectAction::Cancel => self.close_popover(window, cx),
            _ => cx.propagate(),
        }
    }

    fn confirm_highlight(&mut self, cx: &mut Context<Self>) {
        let Some(row) = self.highlight.index() else {
            return;
        };
        let value = self
            .visible_indices()
            .get(row)
            .and_then(|ix| self.options.get(*ix))
            .map(|option| self.accessors.value(option));
        if let Some(value) = value {
            self.toggle_option(&value, cx);
        }
    }

    // ==================== Rendering ====================

    fn render_badges(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = Locale::current(cx);
        let (shown, hidden) = self.selection.visible(self.max_count);
        let pulse = pulse_period(self.animation).filter(|_| self.is_animating);

        let badges: Vec<_> = shown
            .iter()
            .enumerate()
            .map(|(ix, option)| {
                let value = self.accessors.value(option);
                Badge::new(("badge", ix), self.accessors.label(option))
                    .icon(self.accessors.icon(option))
                    .variant(self.variant)
                    .pulse(pulse)
                    .on_remove(cx.listener(move |this, _, _, cx| {
                        this.toggle_option(&value, cx);
                    }))
            })
            .collect();

        let overflow = (hidden > 0).then(|| {
            Badge::new("badge-more", t_count(locale, "select-more", hidden))
                .variant(BadgeVariant::Secondary)
                .pulse(pulse)
                .on_remove(cx.listener(|this, _, _, cx| this.trim_overflow(cx)))
        });

        h_flex()
            .flex_1()
            .flex_wrap()
            .gap_1()
            .children(badges)
            .children(overflow)
    }

    fn render_trigger(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = Locale::current(cx);
        let border = cx.theme().border;
        let background = cx.theme().background;
        let muted_foreground = cx.theme().muted_foreground;
        let view = cx.weak_entity();

        let content = if self.selection.is_empty() {
            let placeholder = self
                .placeholder
                .clone()
                .unwrap_or_else(|| t(locale, "select-placeholder"));
            h_flex()
                .flex_1()
                .justify_between()
                .px_2()
                .child(div().text_sm().text_color(muted_foreground).child(placeholder))
                .child(Icon::new(IconName::ChevronDown).size_4().text_color(muted_foreground))
                .into_any_element()
        } else {
            h_flex()
                .flex_1()
                .justify_between()
                .gap_2()
                .child(self.render_badges(cx))
                .child(
                    h_flex()
                        .gap_2()
                        .flex_shrink_0()
                        .when(self.animation > 0.0, |el| {
                            el.child(
                                div()
                                    .id("animate-toggle")
                                    .cursor_pointer()
                                    .on_click(cx.listener(|this, _, _, cx| {
                                        cx.stop_propagation();
                                        this.toggle_animation(cx);
                                    }))
                                    .child(
                                        Icon::from(CustomIconName::WandSparkles)
                                            .size_4()
                                            .text_color(muted_foreground),
                                    ),
                            )
                        })
                        .child(
                            div()
                                .id("clear-all")
                                .cursor_pointer()
                                .on_click(cx.listener(|this, _, _, cx| {
                                    cx.stop_propagation();
                                    this.clear(cx);
                                }))
                                .child(Icon::new(IconName::Close).size_4().text_color(muted_foreground)),
                        )
                        .child(div().w_px().h(px(16.0)).bg(border))
                        .child(Icon::new(IconName::ChevronDown).size_4().text_color(muted_foreground)),
                )
                .into_any_element()
        };

        h_flex()
            .id("trigger")
            .relative()
            .min_h(px(40.0))
            .min_w(px(TRIGGER_MIN_WIDTH))
            .when_some(self.width, |el, width| el.w(width))
            .p_1()
            .rounded_md()
            .border_1()
            .border_color(border)
            .bg(background)
            .map(|el| {
                if self.disabled {
                    el.opacity(0.5).cursor_not_allowed()
                } else {
                    el.cursor_pointer()
                        .on_click(cx.listener(|this, _, window, cx| this.toggle_popover(window, cx)))
                }
            })
            .child(content)
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
        let border = cx.theme().border;
        let muted_foreground = cx.theme().muted_foreground;
        let highlighted = self.highlight.index();

        let rows: Vec<_> = self
            .visible_indices()
            .into_iter()
            .enumerate()
            .filter_map(|(row, ix)| self.options.get(ix).map(|option| (row, ix, option)))
            .map(|(row, ix, option)| {
                let value = self.accessors.value(option);
                let checked = self.selection.contains(&value, &self.accessors);
                let icon = self
                    .accessors
                    .icon(option)
                    .map(|icon| icon.size_4().text_color(muted_foreground));
                CommandItem::new(("option", ix))
                    .highlighted(highlighted == Some(row))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.toggle_option(&value, cx);
                    }))
                    .child(Checkbox::new().checked(checked))
                    .child(h_flex().gap_2().children(icon).child(self.accessors.label(option)))
            })
            .collect();

        let all_selected = self.selection.is_all_selected(&self.options, &self.accessors);
        let select_all = CommandItem::new("select-all")
            .on_click(cx.listener(|this, _, _, cx| this.toggle_all(cx)))
            .child(Checkbox::new().checked(all_selected))
            .child(t(locale, "select-all"));

        let footer = h_flex()
            .w_full()
            .gap_1()
            .when(!self.selection.is_empty(), |el| {
                el.child(
                    Button::new("footer-clear")
                        .ghost()
                        .small()
                        .flex_1()
                        .label(t(locale, "select-clear"))
                        .on_click(cx.listener(|this, _, _, cx| this.clear(cx))),
                )
                .child(div().w_px().h(px(16.0)).bg(border))
            })
            .child(
                Button::new("footer-close")
                    .ghost()
                    .small()
                    .flex_1()
                    .label(t(locale, "select-close"))
                    .on_click(cx.listener(|this, _, window, cx| this.close_popover(window, cx))),
            );

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
            .header(select_all)
            .rows(rows)
            .empty_message(empty_message)
            .loading(loading)
            .footer(footer)
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

impl<T: Clone + 'static, K: SelectValue> EventEmitter<MultiSelectEvent<T, K>> for MultiSelect<T, K> {}

impl<T: Clone + 'static, K: SelectValue> Focusable for MultiSelect<T, K> {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl<T: Clone + 'static, K: SelectValue> Render for MultiSelect<T, K> {
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
