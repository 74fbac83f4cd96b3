//! Client side of the library admin REST endpoints

pub mod http;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        book::{BookId, Quantity},
        search::SearchResult,
        selected::NewBook,
    },
};

pub use http::HttpAdminApi;

/// Admin endpoints the console relies on.
///
/// Mutating calls return the server's response body, which is only logged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Set the stock quantity of a book
    async fn update_quantity(&self, book_id: BookId, quantity: &Quantity) -> AppResult<String>;

    /// Delete a book record
    async fn delete_book(&self, book_id: BookId) -> AppResult<String>;

    /// Search the external catalog by free-text keyword
    async fn search_books(&self, keyword: &str) -> AppResult<SearchResult>;

    /// Register a book from the hidden selection form
    async fn register_book(&self, book: &NewBook) -> AppResult<String>;
}
