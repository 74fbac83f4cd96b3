//! Selection modal view model.
//!
//! Rendering is a pure function of the search result; nothing here touches
//! the terminal or the network.

use std::fmt;

use serde::Serialize;

use crate::messages;
use crate::models::search::{Candidate, SearchResult};

/// One candidate card in the modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCard {
    /// Position in the search result, used by the select action
    pub index: usize,
    pub title: String,
    pub image_url: String,
    pub isbn_line: String,
    pub author_line: String,
    pub publisher_line: String,
    pub pub_date_line: String,
    pub select_label: &'static str,
}

impl CandidateCard {
    fn new(index: usize, candidate: &Candidate) -> Self {
        Self {
            index,
            title: candidate.title.clone(),
            image_url: candidate.image.clone(),
            isbn_line: format!("{}{}", messages::LABEL_ISBN, candidate.isbn),
            author_line: format!("{}{}", messages::LABEL_AUTHOR, candidate.author),
            publisher_line: format!("{}{}", messages::LABEL_PUBLISHER, candidate.publisher),
            pub_date_line: format!("{}{}", messages::LABEL_PUB_DATE, candidate.pub_date),
            select_label: messages::SELECT,
        }
    }
}

/// Content of the selection modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchView {
    pub total_label: Option<String>,
    pub cards: Vec<CandidateCard>,
}

pub fn render(result: &SearchResult) -> SearchView {
    SearchView {
        total_label: result.total.map(messages::total_results),
        cards: result
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| CandidateCard::new(index, candidate))
            .collect(),
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.total_label {
            writeln!(f, "{}", label)?;
        }
        for card in &self.cards {
            writeln!(f, "----")?;
            writeln!(f, "[{}] {}", card.index, card.title)?;
            writeln!(f, "    {}", card.image_url)?;
            writeln!(f, "    {}", card.isbn_line)?;
            writeln!(f, "    {}", card.author_line)?;
            writeln!(f, "    {}", card.publisher_line)?;
            writeln!(f, "    {}", card.pub_date_line)?;
        }
        Ok(())
    }
}
