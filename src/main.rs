//! DFC Select Gallery - Main Entry Point
//!
//! Demo window for the select components.

use dfc_select::gallery::run_app;
use dfc_select::helpers::{get_or_create_cache_dir, is_development};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let console = fmt::layer().with_timer(fmt::time::LocalTime::rfc_3339());

    // Daily log file in the cache directory, if it can be created
    let (file, _guard) = match get_or_create_cache_dir() {
        Ok(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "dfc-select.log"));
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        Err(e) => {
            eprintln!("log file disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry().with(filter).with(console).with(file).init();

    tracing::info!("Starting DFC Select Gallery...");

    run_app();
}
