//! DOM Access
//!
//! Reads paper cards out of the static markup and renders visibility
//! changes back into it.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{FilterConfig, VisibilityMode, CONFIG_ELEMENT_ID};
use crate::controller::CardView;
use crate::error::{MountError, MountResult};
use crate::models::PaperCard;

/// All elements matching `selector` that can be cast to `T`
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        warn!("invalid selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Read the page's config block, if it has one
pub fn read_config(document: &Document) -> FilterConfig {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map(|json| FilterConfig::from_json_or_default(&json))
        .unwrap_or_default()
}

/// Cache each card's status, tags and lowercased text
pub fn read_card(element: &Element) -> PaperCard {
    let status = element.get_attribute("data-status");
    let tags = element.get_attribute("data-tags");
    let text = element.text_content().unwrap_or_default();
    PaperCard::from_attributes(status.as_deref(), tags.as_deref(), &text)
}

/// `CardView` over the live page
pub struct DomView {
    document: Document,
    container: Element,
    cards: Vec<HtmlElement>,
    mode: VisibilityMode,
    hidden_class: String,
    no_results_class: String,
    no_results_selector: String,
    no_results_text: String,
}

impl DomView {
    /// Find the cards and the results container. The returned cards are in
    /// the same order as the view's elements.
    pub fn attach(document: &Document, config: &FilterConfig) -> MountResult<(Self, Vec<PaperCard>)> {
        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| MountError::MissingElement(format!("#{}", config.container_id)))?;

        let elements: Vec<HtmlElement> = query_all(document, &config.card_selector);
        let cards = elements.iter().map(|el| read_card(el)).collect();

        let view = Self {
            document: document.clone(),
            container,
            cards: elements,
            mode: config.visibility,
            hidden_class: config.hidden_class.clone(),
            no_results_class: config.no_results_class.clone(),
            no_results_selector: config.no_results_selector(),
            no_results_text: config.no_results_text.clone(),
        };
        Ok((view, cards))
    }

    fn find_placeholder(&self) -> Option<Element> {
        self.container
            .query_selector(&self.no_results_selector)
            .unwrap_or_else(|e| {
                warn!("bad no-results selector {:?}: {:?}", self.no_results_selector, e);
                None
            })
    }

    fn create_placeholder(&self) -> MountResult<Element> {
        let p = self.document.create_element("p")?;
        p.set_class_name(&self.no_results_class);
        p.set_text_content(Some(&self.no_results_text));
        self.container.append_child(&p)?;
        Ok(p)
    }
}

impl CardView for DomView {
    fn set_visible(&mut self, index: usize, visible: bool) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let result = match self.mode {
            VisibilityMode::Class if visible => card.class_list().remove_1(&self.hidden_class),
            VisibilityMode::Class => card.class_list().add_1(&self.hidden_class),
            VisibilityMode::InlineStyle => card
                .style()
                .set_property("display", if visible { "block" } else { "none" }),
        };
        if let Err(e) = result {
            warn!("could not update card {}: {:?}", index, e);
        }
    }

    fn placeholder_present(&self) -> bool {
        self.find_placeholder().is_some()
    }

    fn insert_placeholder(&mut self) {
        if let Err(e) = self.create_placeholder() {
            warn!("could not insert no-results message: {}", e);
        }
    }

    fn remove_placeholder(&mut self) {
        if let Some(placeholder) = self.find_placeholder() {
            placeholder.remove();
        }
    }
}
