//! Book rows of the administrative stock table

use once_cell::sync::Lazy;
use regex::Regex;
use crate::error::{AppError, AppResult};

pub type BookId = i64;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static QUANTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("quantity pattern is valid"));

/// A stock quantity that passed the numeric-format check.
///
/// The input text is kept and sent as typed, so `"007"` stays `"007"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity(String);

impl Quantity {
    /// Accepts only non-negative integers written with plain digits
    pub fn parse(value: &str) -> AppResult<Self> {
        if QUANTITY_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::Validation(format!("invalid quantity: {:?}", value)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One row of the stock table.
///
/// `current_quantity` is the baseline captured when the row was rendered;
/// `new_quantity` follows the administrator's edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub book_id: BookId,
    pub current_quantity: String,
    pub new_quantity: String,
}

impl BookRow {
    pub fn new(book_id: BookId, current_quantity: impl Into<String>) -> Self {
        let current_quantity = current_quantity.into();
        Self {
            book_id,
            new_quantity: current_quantity.clone(),
            current_quantity,
        }
    }

    pub fn edit(&mut self, value: impl Into<String>) {
        self.new_quantity = value.into();
    }

    /// Whether the edit differs from the baseline (string comparison)
    pub fn is_dirty(&self) -> bool {
        self.current_quantity != self.new_quantity
    }

    /// Adopt a saved quantity as the new baseline
    pub fn commit(&mut self, quantity: &Quantity) {
        self.current_quantity = quantity.as_str().to_string();
        self.new_quantity = self.current_quantity.clone();
    }
}

/// Rows currently shown to the administrator.
///
/// Successful mutations are applied here directly instead of re-fetching
/// the whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookTable {
    rows: Vec<BookRow>,
}

impl BookTable {
    pub fn new(rows: Vec<BookRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    pub fn get(&self, book_id: BookId) -> Option<&BookRow> {
        self.rows.iter().find(|row| row.book_id == book_id)
    }

    pub fn get_mut(&mut self, book_id: BookId) -> Option<&mut BookRow> {
        self.rows.iter_mut().find(|row| row.book_id == book_id)
    }

    pub fn remove(&mut self, book_id: BookId) -> Option<BookRow> {
        let index = self.rows.iter().position(|row| row.book_id == book_id)?;
        Some(self.rows.remove(index))
    }
}
