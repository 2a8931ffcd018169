//! Widget Configuration
//!
//! Selectors and class names default to the markup the page generator
//! emits. A page can override any of them with a JSON block:
//!
//! ```html
//! <script type="application/json" id="paper-filter-config">
//!   { "debounce-ms": 150, "visibility": "inline-style" }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` config block
pub const CONFIG_ELEMENT_ID: &str = "paper-filter-config";

/// How a hidden card is hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityMode {
    /// Toggle `hidden_class` on the card
    #[default]
    Class,
    /// Write `display: block` / `display: none` into the card's style
    InlineStyle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FilterConfig {
    pub card_selector: String,
    pub status_button_selector: String,
    pub category_button_selector: String,
    pub search_input_id: String,
    pub container_id: String,
    pub hidden_class: String,
    pub active_class: String,
    pub no_results_class: String,
    pub no_results_text: String,
    pub visibility: VisibilityMode,
    /// Quiet window for the search box; 0 filters on every keystroke
    pub debounce_ms: u32,
    pub log_level: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            card_selector: ".paper-card".to_string(),
            status_button_selector: ".status-btn".to_string(),
            category_button_selector: ".category-btn".to_string(),
            search_input_id: "searchInput".to_string(),
            container_id: "papers-container".to_string(),
            hidden_class: "hidden".to_string(),
            active_class: "active".to_string(),
            no_results_class: "no-results".to_string(),
            no_results_text: "未找到匹配的论文".to_string(),
            visibility: VisibilityMode::Class,
            debounce_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl FilterConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a config block, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json)
            .unwrap_or_else(|e| {
                log::warn!("ignoring invalid {}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            })
            .with_valid_class_names()
    }

    /// Replace any class name that is not a single CSS class token with
    /// its default. Such names break both `classList` and the selectors
    /// built from them.
    pub fn with_valid_class_names(mut self) -> Self {
        let defaults = Self::default();
        for (name, field, default) in [
            ("hidden-class", &mut self.hidden_class, defaults.hidden_class),
            ("active-class", &mut self.active_class, defaults.active_class),
            ("no-results-class", &mut self.no_results_class, defaults.no_results_class),
        ] {
            if !is_class_token(field) {
                log::warn!("invalid {} {:?}, using {:?}", name, field, default);
                *field = default;
            }
        }
        self
    }

    pub fn level_filter(&self) -> LevelFilter {
        console_logger::parse_level(&self.log_level)
    }

    /// CSS selector for an existing "no results" message
    pub fn no_results_selector(&self) -> String {
        format!(".{}", self.no_results_class)
    }
}

/// A non-empty class name with no whitespace and nothing a `.class`
/// selector would read as another selector
fn is_class_token(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '.' | '#' | ',' | ':' | '[' | ']' | '>' | '+' | '~' | '*'))
}
