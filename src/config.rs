//! Configuration management for the library admin console

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::models::book::BookId;

/// Route used for quantity updates.
///
/// The admin backend has exposed both `/admin/quantity/{id}` and
/// `/admin/books/{id}` for the same PUT.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuantityRoute {
    #[default]
    Quantity,
    Books,
}

impl QuantityRoute {
    /// Path relative to the API base URL
    pub fn path(&self, book_id: BookId) -> String {
        match self {
            QuantityRoute::Quantity => format!("admin/quantity/{}", book_id),
            QuantityRoute::Books => format!("admin/books/{}", book_id),
        }
    }
}

/// What the console does when a catalog search fails
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchFailurePolicy {
    /// Log and show a message to the administrator
    #[default]
    Notify,
    /// Log only
    Log,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub quantity_route: QuantityRoute,
    pub search_path: String,
    pub register_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SearchConfig {
    pub on_failure: SearchFailurePolicy,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            // LIBRARY_ADMIN_API__BASE_URL, LIBRARY_ADMIN_SEARCH__ON_FAILURE, ...
            .add_source(
                Environment::with_prefix("LIBRARY_ADMIN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", env::var("ADMIN_BASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            quantity_route: QuantityRoute::default(),
            search_path: "books/api/book".to_string(),
            register_path: "admin/new-book".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
