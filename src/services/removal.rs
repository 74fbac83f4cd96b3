//! Book deletion

use std::sync::Arc;

use super::ActionOutcome;
use crate::{
    api::AdminApi,
    messages,
    models::book::{BookId, BookTable},
    prompt::Prompt,
};

#[derive(Clone)]
pub struct BookRemover {
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn Prompt>,
}

impl BookRemover {
    pub fn new(api: Arc<dyn AdminApi>, prompt: Arc<dyn Prompt>) -> Self {
        Self { api, prompt }
    }

    /// Delete a book after explicit confirmation, then drop its row
    pub async fn remove(&self, table: &mut BookTable, book_id: BookId) -> ActionOutcome {
        if !self.prompt.confirm(messages::CONFIRM_DELETE) {
            tracing::debug!("Deletion of book {} cancelled", book_id);
            return ActionOutcome::Cancelled;
        }

        match self.api.delete_book(book_id).await {
            Ok(response) => {
                tracing::info!("Book {} deleted: {}", book_id, response);
                table.remove(book_id);
                ActionOutcome::Completed { response }
            }
            Err(e) => {
                tracing::warn!("Failed to delete book {}: {}", book_id, e);
                self.prompt.alert(&e.display_text());
                ActionOutcome::Failed(e)
            }
        }
    }
}
