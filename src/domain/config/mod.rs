//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, DEFAULT_BIND, DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
