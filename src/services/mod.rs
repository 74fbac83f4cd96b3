//! Console handlers

pub mod quantity;
pub mod removal;
pub mod search;

use std::sync::Arc;

use crate::{api::AdminApi, config::AppConfig, error::AppError, prompt::Prompt};

/// Result of an administrator action.
///
/// Failures have already been reported to the administrator when they are
/// returned; the error is handed back for logging and exit codes.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The action is disabled; nothing was sent
    Disabled,
    /// Client-side validation failed; nothing was sent
    Rejected,
    /// The administrator declined the confirmation; nothing was sent
    Cancelled,
    /// The server accepted the request
    Completed { response: String },
    /// The request failed
    Failed(AppError),
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed { .. })
    }
}

/// Container for all console handlers
pub struct Services {
    pub quantity: quantity::QuantityEditor,
    pub removal: removal::BookRemover,
    pub search: search::BookSearchSelector,
}

impl Services {
    pub fn new(api: Arc<dyn AdminApi>, prompt: Arc<dyn Prompt>, config: &AppConfig) -> Self {
        Self {
            quantity: quantity::QuantityEditor::new(api.clone(), prompt.clone()),
            removal: removal::BookRemover::new(api.clone(), prompt.clone()),
            search: search::BookSearchSelector::new(api, prompt, config.search.on_failure),
        }
    }
}
