//! Stock quantity editing

use std::sync::Arc;

use super::ActionOutcome;
use crate::{
    api::AdminApi,
    messages,
    models::book::{BookRow, Quantity},
    prompt::Prompt,
};

#[derive(Clone)]
pub struct QuantityEditor {
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn Prompt>,
}

impl QuantityEditor {
    pub fn new(api: Arc<dyn AdminApi>, prompt: Arc<dyn Prompt>) -> Self {
        Self { api, prompt }
    }

    /// Record an edit of the quantity field.
    ///
    /// Returns whether the update action is enabled afterwards.
    pub fn on_input(row: &mut BookRow, value: &str) -> bool {
        row.edit(value);
        row.is_dirty()
    }

    /// Send the edited quantity of `row`.
    ///
    /// On success the row's baseline becomes the saved value.
    pub async fn submit(&self, row: &mut BookRow) -> ActionOutcome {
        if !row.is_dirty() {
            tracing::debug!("Quantity of book {} unchanged, update disabled", row.book_id);
            return ActionOutcome::Disabled;
        }

        let quantity = match Quantity::parse(&row.new_quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                tracing::debug!("Rejected quantity for book {}: {}", row.book_id, e);
                self.prompt.alert(messages::INVALID_QUANTITY);
                return ActionOutcome::Rejected;
            }
        };

        tracing::info!("bookId: {}, quantity: {}", row.book_id, quantity.as_str());

        match self.api.update_quantity(row.book_id, &quantity).await {
            Ok(response) => {
                tracing::info!("Quantity of book {} updated: {}", row.book_id, response);
                row.commit(&quantity);
                ActionOutcome::Completed { response }
            }
            Err(e) => {
                tracing::warn!("Failed to update quantity of book {}: {}", row.book_id, e);
                self.prompt.alert(&e.display_text());
                ActionOutcome::Failed(e)
            }
        }
    }
}
