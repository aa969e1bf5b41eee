//! Configuration management: site defaults, the persisted site configuration,
//! and runtime server settings from the environment.

pub mod app_config;
pub mod defaults;
pub mod manager;

pub use app_config::AppConfig;
pub use manager::{CONFIG_KEY, ConfigManager, merge_over_defaults};

/// The site configuration: a JSON object keyed by setting name.
pub type Configuration = serde_json::Map<String, serde_json::Value>;
