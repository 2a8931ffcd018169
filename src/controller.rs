//! Filter Controller
//!
//! Owns the filter selection and the cached cards, and pushes visibility
//! changes into a `CardView` after every change.

use log::debug;

use crate::filter::FilterState;
use crate::models::{PaperCard, PaperStatus, Selection};

/// Where visibility changes are rendered (the page, or a test double)
pub trait CardView {
    /// Show or hide the card at `index` (same order as the cached cards)
    fn set_visible(&mut self, index: usize, visible: bool);

    /// Whether a "no results" message is currently on the page
    fn placeholder_present(&self) -> bool;

    fn insert_placeholder(&mut self);

    fn remove_placeholder(&mut self);
}

pub struct FilterController<V: CardView> {
    cards: Vec<PaperCard>,
    state: FilterState,
    view: V,
    visible: usize,
}

impl<V: CardView> FilterController<V> {
    /// Take ownership of the cards and their view. Nothing is rendered
    /// until the first selection change.
    pub fn new(cards: Vec<PaperCard>, view: V) -> Self {
        let visible = cards.len();
        Self {
            cards,
            state: FilterState::default(),
            view,
            visible,
        }
    }

    pub fn set_status(&mut self, status: Selection<PaperStatus>) -> usize {
        self.state.status = status;
        self.recompute()
    }

    pub fn set_category(&mut self, category: Selection<String>) -> usize {
        self.state.category = category;
        self.recompute()
    }

    /// Set the search term. Matching is case-insensitive; the term is not trimmed.
    pub fn set_term(&mut self, term: &str) -> usize {
        self.state.term = term.to_lowercase();
        self.recompute()
    }

    /// Re-evaluate every card against the current selection.
    /// Returns the number of visible cards.
    pub fn recompute(&mut self) -> usize {
        let mut visible = 0;
        for (index, card) in self.cards.iter().enumerate() {
            let show = self.state.matches(card);
            self.view.set_visible(index, show);
            if show {
                visible += 1;
            }
        }

        if visible == 0 {
            if !self.view.placeholder_present() {
                self.view.insert_placeholder();
            }
        } else if self.view.placeholder_present() {
            self.view.remove_placeholder();
        }

        debug!(
            "filter status={} category={} term={:?}: {}/{} visible",
            self.state.status,
            self.state.category,
            self.state.term,
            visible,
            self.cards.len()
        );
        self.visible = visible;
        visible
    }

    /// Visible count as of the last pass
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    #[cfg(test)]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }
}
