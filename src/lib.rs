//! Library administration console
//!
//! Client-side workflow of the administrative book page: stock quantity
//! edits, book removal, and catalog search with selection into a
//! registration form.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod prompt;
pub mod services;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Console handlers wired to the admin backend
pub struct Console {
    pub services: services::Services,
}

impl Console {
    /// Wire the handlers to the HTTP admin API described by `config`
    pub fn connect(config: AppConfig, prompt: Arc<dyn prompt::Prompt>) -> AppResult<Self> {
        let api = api::HttpAdminApi::new(config.api.clone())?;
        let services = services::Services::new(Arc::new(api), prompt, &config);

        Ok(Self { services })
    }
}
