//! Filter State
//!
//! The three user selections and the predicate that combines them.

use crate::models::{PaperCard, PaperStatus, Selection};

/// Current status / category / search term selection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub status: Selection<PaperStatus>,
    pub category: Selection<String>,
    /// Search term, already lowercased
    pub term: String,
}

impl FilterState {
    pub fn matches_status(&self, card: &PaperCard) -> bool {
        match &self.status {
            Selection::All => true,
            Selection::Only(status) => card.status == *status,
        }
    }

    pub fn matches_category(&self, card: &PaperCard) -> bool {
        match &self.category {
            Selection::All => true,
            Selection::Only(tag) => card.has_tag(tag),
        }
    }

    pub fn matches_term(&self, card: &PaperCard) -> bool {
        self.term.is_empty() || card.text.contains(&self.term)
    }

    /// A card is shown only when all three selections accept it
    pub fn matches(&self, card: &PaperCard) -> bool {
        self.matches_status(card) && self.matches_category(card) && self.matches_term(card)
    }
}
