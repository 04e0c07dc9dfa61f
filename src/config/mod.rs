/// Catalog loading from catalog.toml
pub mod catalog;

/// Runtime settings from environment variables
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
