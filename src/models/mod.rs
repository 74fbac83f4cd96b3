//! Data models for the admin console

pub mod book;
pub mod search;
pub mod selected;

// Re-export commonly used types
pub use book::{BookId, BookRow, BookTable, Quantity};
pub use search::{Candidate, SearchResponse, SearchResult};
pub use selected::{NewBook, SelectedBook};
