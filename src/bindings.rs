//! Event Bindings
//!
//! Wires the filter buttons and search box to the controller. Listener
//! closures live for the lifetime of the page and are leaked on purpose.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::config::FilterConfig;
use crate::controller::FilterController;
use crate::debounce::{Debouncer, TimeoutScheduler};
use crate::dom::{query_all, read_config, DomView};
use crate::error::{MountError, MountResult};
use crate::models::Selection;

pub type SharedController = Rc<RefCell<FilterController<DomView>>>;

/// Mount once the document has been parsed
pub fn run() -> MountResult<()> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount(&doc) {
                log::error!("paper filter not mounted: {}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    mount(&document).map(|_| ())
}

/// Build the controller from the current page and attach all listeners
pub fn mount(document: &Document) -> MountResult<SharedController> {
    let config = read_config(document);
    log::set_max_level(config.level_filter());

    let (view, cards) = DomView::attach(document, &config)?;
    let controller = Rc::new(RefCell::new(FilterController::new(cards, view)));

    bind_button_group(
        document,
        &config.status_button_selector,
        "data-status",
        &config.active_class,
        &controller,
        |ctl, raw| ctl.set_status(Selection::status(raw)),
    )?;
    bind_button_group(
        document,
        &config.category_button_selector,
        "data-category",
        &config.active_class,
        &controller,
        |ctl, raw| ctl.set_category(Selection::category(raw)),
    )?;
    bind_search(document, &config, &controller)?;

    {
        let ctl = controller.borrow();
        info!(
            "paper filter mounted: {}/{} cards visible, debounce {}ms",
            ctl.visible_count(),
            ctl.total(),
            config.debounce_ms
        );
    }
    Ok(controller)
}

/// Click handlers for one group of mutually exclusive filter buttons
fn bind_button_group<F>(
    document: &Document,
    selector: &str,
    value_attr: &'static str,
    active_class: &str,
    controller: &SharedController,
    apply: F,
) -> MountResult<()>
where
    F: Fn(&mut FilterController<DomView>, Option<&str>) -> usize + Clone + 'static,
{
    let buttons: Rc<Vec<Element>> = Rc::new(query_all(document, selector));
    if buttons.is_empty() {
        warn!("no filter buttons match {:?}", selector);
        return Ok(());
    }

    for button in buttons.iter() {
        let group = Rc::clone(&buttons);
        let clicked = button.clone();
        let active_class = active_class.to_string();
        let controller = Rc::clone(controller);
        let apply = apply.clone();

        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            for b in group.iter() {
                let _ = b.class_list().remove_1(&active_class);
            }
            let _ = clicked.class_list().add_1(&active_class);

            let raw = clicked.get_attribute(value_attr);
            apply(&mut controller.borrow_mut(), raw.as_deref());
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Debounced input handler for the search box
fn bind_search(document: &Document, config: &FilterConfig, controller: &SharedController) -> MountResult<()> {
    let Some(input) = document
        .get_element_by_id(&config.search_input_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        warn!("no search input #{}", config.search_input_id);
        return Ok(());
    };

    let debouncer = Debouncer::new(TimeoutScheduler, config.debounce_ms);
    let source = input.clone();
    let controller = Rc::clone(controller);

    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let term = source.value();
        let controller = Rc::clone(&controller);
        debouncer.call(move || {
            controller.borrow_mut().set_term(&term);
        });
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}
