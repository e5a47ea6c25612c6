//! Gallery
//!
//! Desktop demo hosting every select configuration, with persisted settings.

pub mod application;
pub mod catalog;
pub mod config;
pub mod workspace;

pub use application::run_app;
pub use config::GalleryConfig;
