pub mod app_config;
pub mod config;
pub mod news;
pub mod sources;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use news::{Category, NewsItem};
pub use sources::{source_by_name, sources, Source};
