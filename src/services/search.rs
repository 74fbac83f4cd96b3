//! Catalog search and candidate selection

use std::sync::Arc;

use validator::Validate;

use crate::{
    api::AdminApi,
    config::SearchFailurePolicy,
    error::{AppError, AppResult},
    messages,
    models::{
        search::SearchResult,
        selected::{NewBook, SelectedBook},
    },
    prompt::Prompt,
    view::{self, SearchView},
};

/// Result of a search trigger
#[derive(Debug)]
pub enum SearchOutcome {
    /// Keyword was blank; nothing was sent
    Blank,
    /// The modal is open with this many candidate cards
    Rendered(usize),
    Failed(AppError),
}

/// Search modal plus the hidden form it fills.
///
/// Search results live only while the modal is open; the hidden form keeps
/// the last selection until it is submitted.
pub struct BookSearchSelector {
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn Prompt>,
    on_failure: SearchFailurePolicy,
    result: Option<SearchResult>,
    view: Option<SearchView>,
    selected: Option<SelectedBook>,
    form_visible: bool,
}

impl BookSearchSelector {
    pub fn new(
        api: Arc<dyn AdminApi>,
        prompt: Arc<dyn Prompt>,
        on_failure: SearchFailurePolicy,
    ) -> Self {
        Self {
            api,
            prompt,
            on_failure,
            result: None,
            view: None,
            selected: None,
            form_visible: false,
        }
    }

    pub async fn search(&mut self, keyword: &str) -> SearchOutcome {
        if keyword.trim().is_empty() {
            self.prompt.alert(messages::EMPTY_KEYWORD);
            return SearchOutcome::Blank;
        }

        self.close_modal();

        match self.api.search_books(keyword).await {
            Ok(result) => {
                let view = view::render(&result);
                let cards = view.cards.len();
                tracing::info!(
                    "Search for {:?} returned {} candidates (total {:?})",
                    keyword,
                    cards,
                    result.total
                );
                self.result = Some(result);
                self.view = Some(view);
                SearchOutcome::Rendered(cards)
            }
            Err(e) => {
                tracing::warn!("{}: {}", messages::SEARCH_ERROR_LOG, e);
                if self.on_failure == SearchFailurePolicy::Notify {
                    self.prompt.alert(messages::SEARCH_FAILED);
                }
                SearchOutcome::Failed(e)
            }
        }
    }

    /// Modal content, while the modal is open
    pub fn view(&self) -> Option<&SearchView> {
        self.view.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn close_modal(&mut self) {
        self.result = None;
        self.view = None;
    }

    /// Copy the candidate at `index` into the hidden form.
    ///
    /// Replaces any earlier selection, closes the modal and shows the form.
    pub fn select(&mut self, index: usize) -> AppResult<&SelectedBook> {
        let candidate = self
            .result
            .as_ref()
            .and_then(|result| result.get(index))
            .ok_or_else(|| AppError::Validation(format!("No candidate at index {}", index)))?;

        let selected = SelectedBook::from(candidate);
        tracing::debug!("Selected candidate {} (isbn {})", index, selected.isbn);

        self.close_modal();
        self.form_visible = true;
        Ok(self.selected.insert(selected))
    }

    /// Hidden form content, once a candidate has been selected
    pub fn selected(&self) -> Option<&SelectedBook> {
        self.selected.as_ref()
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    /// Submit the hidden form to register the selected book
    pub async fn register(&mut self, quantity: u32) -> AppResult<String> {
        let book = self
            .selected
            .clone()
            .ok_or_else(|| AppError::Validation("No book selected".to_string()))?;

        let request = NewBook { book, quantity };
        request.validate()?;

        let response = self.api.register_book(&request).await?;
        tracing::info!("Registered book {}: {}", request.book.isbn, response);

        self.selected = None;
        self.form_visible = false;
        Ok(response)
    }
}
