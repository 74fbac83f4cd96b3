//! Hidden registration form filled from a selected search candidate

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::search::Candidate;

/// Candidate fields copied into the hidden form, one field per attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SelectedBook {
    #[validate(length(equal = 13, message = "ISBN must be 13 characters"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Publisher is required"))]
    pub publisher: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Cover image is required"))]
    pub image: String,
    #[serde(rename = "pubDate")]
    #[validate(length(min = 1, message = "Publication date is required"))]
    pub pub_date: String,
}

impl From<&Candidate> for SelectedBook {
    fn from(candidate: &Candidate) -> Self {
        Self {
            isbn: candidate.isbn.clone(),
            title: candidate.title.clone(),
            author: candidate.author.clone(),
            publisher: candidate.publisher.clone(),
            description: candidate.description.clone(),
            image: candidate.image.clone(),
            pub_date: candidate.pub_date.clone(),
        }
    }
}

/// Registration request submitted from the hidden form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewBook {
    #[serde(flatten)]
    #[validate(nested)]
    pub book: SelectedBook,
    #[validate(range(min = 1, max = 9999, message = "Quantity must be between 1 and 9999"))]
    pub quantity: u32,
}

impl NewBook {
    /// Url-encoded form fields, named as the registration endpoint binds them
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("isbn", self.book.isbn.clone()),
            ("title", self.book.title.clone()),
            ("author", self.book.author.clone()),
            ("publisher", self.book.publisher.clone()),
            ("image", self.book.image.clone()),
            ("description", self.book.description.clone()),
            ("pubDate", self.book.pub_date.clone()),
            ("quantity", self.quantity.to_string()),
        ]
    }
}
