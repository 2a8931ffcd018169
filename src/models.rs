//! Frontend Models
//!
//! Per-card data cached from the static page markup.

use std::collections::BTreeSet;
use std::fmt;

/// Publication state of a paper (`data-status` on a card)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaperStatus {
    /// Appeared at a conference or in a journal
    Published,
    /// ArXiv preprint only
    Preprint,
    /// Any other label, kept verbatim
    Other(String),
}

impl PaperStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaperStatus::Published => "published",
            PaperStatus::Preprint => "preprint",
            PaperStatus::Other(label) => label,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "published" => PaperStatus::Published,
            "preprint" => PaperStatus::Preprint,
            other => PaperStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter button's value: everything, or one specific value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    /// Parse a button's raw data attribute. Only `"all"` means `All`;
    /// a missing value selects the empty value.
    pub fn parse_with(raw: Option<&str>, parse: impl FnOnce(&str) -> T) -> Self {
        match raw.unwrap_or_default() {
            "all" => Selection::All,
            value => Selection::Only(parse(value)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(value) => write!(f, "{:?}", value.to_string()),
        }
    }
}

impl Selection<PaperStatus> {
    pub fn status(raw: Option<&str>) -> Self {
        Self::parse_with(raw, PaperStatus::parse)
    }
}

impl Selection<String> {
    pub fn category(raw: Option<&str>) -> Self {
        Self::parse_with(raw, str::to_string)
    }
}

/// One paper card, with everything the filter needs computed up front
#[derive(Debug, Clone, PartialEq)]
pub struct PaperCard {
    pub status: PaperStatus,
    pub tags: BTreeSet<String>,
    /// Lowercased visible text of the card
    pub text: String,
}

impl PaperCard {
    /// Build from the raw `data-status`, `data-tags` and text content.
    /// Missing attributes become an empty status / empty tag set.
    pub fn from_attributes(status: Option<&str>, tags: Option<&str>, text: &str) -> Self {
        Self {
            status: PaperStatus::parse(status.unwrap_or_default()),
            tags: parse_tags(tags.unwrap_or_default()),
            text: text.to_lowercase(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Split a comma separated tag list, dropping blank entries
pub fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
