//! Shared domain types and configuration for the Vendor Hub supplier search.

pub mod app_config;
pub mod config;
pub mod error;
pub mod score;
pub mod types;

pub use app_config::{AppConfig, Environment, DEFAULT_ENDPOINT};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use score::ScoreTier;
pub use types::{Field, SearchRequest, SupplierMatch, UnknownField};
