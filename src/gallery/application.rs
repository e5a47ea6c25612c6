//! Application - Gallery Initialization and Window Management

use gpui::{
    AnyView, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, point, px, size,
};
use gpui_component::{Root, Theme};
use tracing::{error, info};

use super::config::GalleryConfig;
use super::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{GalleryAction, gallery_key_bindings};
use crate::i18n::t;

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        crate::init(cx);
        cx.bind_keys(gallery_key_bindings());

        let config = GalleryConfig::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load config, using defaults");
            GalleryConfig::default()
        });
        let locale = config.locale();
        cx.set_global(locale);

        cx.on_action(|action: &GalleryAction, cx: &mut App| {
            if *action == GalleryAction::Quit {
                info!("Quit requested");
                cx.quit();
            }
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(None, size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "gallery-title")),
                appears_transparent: false,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            if let Some(mode) = config.theme() {
                Theme::change(mode, Some(window), cx);
            }
            let view = cx.new(|cx| Workspace::new(config, window, cx));
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
