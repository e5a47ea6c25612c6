//! Workspace - Gallery Shell
//!
//! Hosts four demo selects, the settings toolbar and a shortcuts legend.
//! Select events drive the workspace and the [`PagedFeed`] entities; feed
//! changes are pushed back into the selects through observers.

use std::rc::Rc;

use gpui::{
    AnyElement, App, AppContext, Context, Entity, FocusHandle, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Sizable, StyledExt, Theme, ThemeMode,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use tracing::info;

use super::catalog::{
    Catalog, Framework, PagedFeed, Region, Turbine, framework_accessors, frameworks, region_accessors, regions,
    turbine_accessors,
};
use super::config::GalleryConfig;
use crate::components::{BadgeVariant, MultiSelect, MultiSelectEvent, SingleSelect, SingleSelectEvent};
use crate::helpers::{GalleryAction, humanize_keystroke};
use crate::i18n::{Locale, t};

const CARD_WIDTH: f32 = 440.0;

/// Gallery root view
pub struct Workspace {
    focus_handle: FocusHandle,
    config: GalleryConfig,
    frameworks: Entity<MultiSelect<Framework, &'static str>>,
    turbines: Entity<MultiSelect<Turbine, u32>>,
    region: Entity<SingleSelect<Region, &'static str>>,
    device: Entity<SingleSelect<Turbine, u32>>,
    framework_values: Vec<&'static str>,
    turbine_labels: Vec<SharedString>,
    region_value: Option<&'static str>,
    device_value: Option<u32>,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(config: GalleryConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let catalog = Rc::new(Catalog::default());
        let turbine_feed =
            cx.new(|_| PagedFeed::new(catalog.clone(), config.page_size(), config.fetch_delay()));
        let device_feed = cx.new(|_| PagedFeed::new(catalog.clone(), config.page_size(), config.fetch_delay()));

        // Local multi-select
        let initial_frameworks: Vec<Framework> = frameworks().into_iter().take(2).collect();
        let framework_values = initial_frameworks.iter().map(|f| f.value).collect();
        let frameworks = cx.new(|cx| {
            MultiSelect::new("frameworks", frameworks(), framework_accessors(), cx)
                .with_default_selected(initial_frameworks)
                .with_max_count(config.max_count())
                .with_animation(config.animation())
                .with_modal_popover(config.modal_popover())
        });

        // Delegated, paginated multi-select
        let (turbine_items, turbine_signal) = {
            let feed = turbine_feed.read(cx);
            (feed.items().to_vec(), feed.signal())
        };
        let turbines = cx.new(|cx| {
            MultiSelect::new("turbines", turbine_items, turbine_accessors(), cx)
                .with_delegated_search(true)
                .with_pagination(turbine_signal)
                .with_max_count(config.max_count())
                .with_animation(config.animation())
                .with_variant(BadgeVariant::Secondary)
                .with_modal_popover(config.modal_popover())
        });

        // Local single-select
        let region = cx.new(|cx| {
            SingleSelect::new("region", regions(), region_accessors(), cx)
                .with_modal_popover(config.modal_popover())
        });

        // Delegated, paginated single-select preset to a record outside the first page
        let (device_items, device_signal) = {
            let feed = device_feed.read(cx);
            (feed.items().to_vec(), feed.signal())
        };
        let preset = catalog.query("", catalog.len().saturating_sub(1), 1).items.into_iter().next();
        let device_value = preset.as_ref().map(|t| t.id);
        let device = cx.new(|cx| {
            let select = SingleSelect::new("device", device_items, turbine_accessors(), cx)
                .with_value(device_value)
                .with_delegated_search(true)
                .with_pagination(device_signal)
                .with_modal_popover(config.modal_popover());
            match preset {
                Some(turbine) => select.with_default_display_value(turbine.name),
                None => select,
            }
        });

        let subscriptions = vec![
            cx.subscribe(&frameworks, |this, _, event: &MultiSelectEvent<Framework, &'static str>, cx| {
                if let MultiSelectEvent::Change { values, .. } = event {
                    this.framework_values = values.clone();
                    cx.notify();
                }
            }),
            cx.subscribe(&turbines, {
                let feed = turbine_feed.clone();
                move |this, _, event: &MultiSelectEvent<Turbine, u32>, cx| match event {
                    MultiSelectEvent::Change { options, .. } => {
                        this.turbine_labels = options.iter().map(|t| t.name.clone()).collect();
                        cx.notify();
                    }
                    MultiSelectEvent::SearchChange(term) => feed.update(cx, |feed, cx| feed.search(term, cx)),
                    MultiSelectEvent::LoadMore => feed.update(cx, |feed, cx| feed.load_next(cx)),
                }
            }),
            // Controlled value: the select only shows what the workspace echoes back
            cx.subscribe(&region, |this, select, event: &SingleSelectEvent<&'static str>, cx| {
                if let SingleSelectEvent::Change(value) = event {
                    this.region_value = *value;
                    select.update(cx, |select, cx| select.set_value(*value, cx));
                    cx.notify();
                }
            }),
            cx.subscribe(&device, {
                let feed = device_feed.clone();
                move |this, select, event: &SingleSelectEvent<u32>, cx| match event {
                    SingleSelectEvent::Change(value) => {
                        this.device_value = *value;
                        select.update(cx, |select, cx| select.set_value(*value, cx));
                        cx.notify();
                    }
                    SingleSelectEvent::SearchChange(term) => feed.update(cx, |feed, cx| feed.search(term, cx)),
                    SingleSelectEvent::LoadMore => feed.update(cx, |feed, cx| feed.load_next(cx)),
                }
            }),
            cx.observe(&turbine_feed, |this, feed, cx| {
                let (items, signal) = {
                    let feed = feed.read(cx);
                    (feed.items().to_vec(), feed.signal())
                };
                this.turbines.update(cx, |select, cx| {
                    select.set_options(items, cx);
                    select.set_pagination(signal, cx);
                });
            }),
            cx.observe(&device_feed, |this, feed, cx| {
                let (items, signal) = {
                    let feed = feed.read(cx);
                    (feed.items().to_vec(), feed.signal())
                };
                this.device.update(cx, |select, cx| {
                    select.set_options(items, cx);
                    select.set_pagination(signal, cx);
                });
            }),
        ];

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            focus_handle,
            config,
            frameworks,
            turbines,
            region,
            device,
            framework_values,
            turbine_labels: Vec::new(),
            region_value: None,
            device_value,
            _subscriptions: subscriptions,
        }
    }

    // ==================== Actions ====================

    fn on_gallery_action(&mut self, action: &GalleryAction, window: &mut Window, cx: &mut Context<Self>) {
        match action {
            GalleryAction::ToggleTheme => self.toggle_theme(window, cx),
            GalleryAction::ToggleLocale => self.toggle_locale(window, cx),
            GalleryAction::Quit => cx.propagate(),
        }
    }

    fn toggle_theme(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let mode = if cx.theme().is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        info!(mode = ?mode, "Toggle theme");
        Theme::change(mode, Some(window), cx);
        self.config.set_theme(Some(mode));
        self.config.save_in_background(cx, "toggle_theme");
        cx.notify();
    }

    fn toggle_locale(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let locale = Locale::current(cx).toggled();
        info!(locale = locale.code(), "Toggle locale");
        cx.set_global(locale);
        window.set_window_title(&t(locale, "gallery-title"));
        self.config.set_locale(locale);
        self.config.save_in_background(cx, "toggle_locale");
        cx.refresh_windows();
    }

    fn toggle_modal(&mut self, cx: &mut Context<Self>) {
        let modal = !self.config.modal_popover();
        self.config.set_modal_popover(modal);
        self.config.save_in_background(cx, "toggle_modal");
        self.frameworks.update(cx, |select, cx| select.set_modal_popover(modal, cx));
        self.turbines.update(cx, |select, cx| select.set_modal_popover(modal, cx));
        self.region.update(cx, |select, cx| select.set_modal_popover(modal, cx));
        self.device.update(cx, |select, cx| select.set_modal_popover(modal, cx));
        cx.notify();
    }

    // ==================== Rendering ====================

    fn render_toolbar(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let modal_state = if self.config.modal_popover() {
            t(locale, "gallery-on")
        } else {
            t(locale, "gallery-off")
        };

        h_flex()
            .w_full()
            .gap_2()
            .child(Label::new(t(locale, "gallery-title")).text_xl())
            .child(div().flex_1())
            .child(
                Button::new("toggle-modal")
                    .ghost()
                    .small()
                    .label(format!("{}: {}", t(locale, "gallery-modal"), modal_state))
                    .on_click(cx.listener(|this, _, _window, cx| this.toggle_modal(cx))),
            )
            .child(
                Button::new("toggle-theme")
                    .ghost()
                    .small()
                    .label(t(locale, "gallery-theme"))
                    .on_click(cx.listener(|this, _, window, cx| this.toggle_theme(window, cx))),
            )
            .child(
                Button::new("toggle-locale")
                    .ghost()
                    .small()
                    .label(format!("{} ({})", t(locale, "gallery-locale"), locale.toggled().display_name()))
                    .on_click(cx.listener(|this, _, window, cx| this.toggle_locale(window, cx))),
            )
    }

    fn render_card(
        title: SharedString,
        description: SharedString,
        select: AnyElement,
        selected: String,
        locale: Locale,
        cx: &App,
    ) -> impl IntoElement + use<> {
        let selected = if selected.is_empty() {
            t(locale, "gallery-none").to_string()
        } else {
            selected
        };

        v_flex()
            .w(px(CARD_WIDTH))
            .gap_2()
            .p_4()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .child(Label::new(title).font_semibold())
            .child(Label::new(description).text_sm().text_color(cx.theme().muted_foreground))
            .child(select)
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(format!("{}: {}", t(locale, "gallery-selected"), selected)),
            )
    }

    fn render_shortcuts(locale: Locale, cx: &App) -> impl IntoElement + use<> {
        let rows = [
            ("up", "gallery-navigate"),
            ("down", "gallery-navigate"),
            ("enter", "gallery-confirm"),
            ("escape", "gallery-dismiss"),
            ("secondary-shift-t", "gallery-theme"),
            ("secondary-shift-l", "gallery-locale"),
            ("secondary-q", "gallery-quit"),
        ];

        v_flex()
            .gap_1()
            .child(Label::new(t(locale, "gallery-shortcuts")).font_semibold())
            .children(rows.into_iter().map(|(keystroke, key)| {
                h_flex()
                    .gap_2()
                    .text_sm()
                    .child(
                        div()
                            .w(px(120.))
                            .text_color(cx.theme().muted_foreground)
                            .child(humanize_keystroke(keystroke)),
                    )
                    .child(t(locale, key))
            }))
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = Locale::current(cx);
        let frameworks = Self::render_card(
            t(locale, "gallery-frameworks"),
            t(locale, "gallery-frameworks-desc"),
            self.frameworks.clone().into_any_element(),
            self.framework_values.join(", "),
            locale,
            cx,
        );
        let turbines = Self::render_card(
            t(locale, "gallery-turbines"),
            t(locale, "gallery-turbines-desc"),
            self.turbines.clone().into_any_element(),
            self.turbine_labels.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(", "),
            locale,
            cx,
        );
        let region = Self::render_card(
            t(locale, "gallery-region"),
            t(locale, "gallery-region-desc"),
            self.region.clone().into_any_element(),
            self.region_value.map(str::to_string).unwrap_or_default(),
            locale,
            cx,
        );
        let device = Self::render_card(
            t(locale, "gallery-device"),
            t(locale, "gallery-device-desc"),
            self.device.clone().into_any_element(),
            self.device_value.map(|id| format!("#{id}")).unwrap_or_default(),
            locale,
            cx,
        );

        v_flex()
            .id("workspace")
            .size_full()
            .gap_4()
            .p_6()
            .overflow_y_scroll()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_gallery_action))
            .child(self.render_toolbar(locale, cx))
            .child(
                h_flex()
                    .flex_wrap()
                    .items_start()
                    .gap_4()
                    .child(frameworks)
                    .child(turbines)
                    .child(region)
                    .child(device),
            )
            .child(Self::render_shortcuts(locale, cx))
    }
}
