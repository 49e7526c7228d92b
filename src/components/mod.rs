//! DOM bindings for every page controller.
//!
//! ARCHITECTURE
//! ============
//! Each submodule exposes `mount`, which looks up its elements once, wires
//! listeners, and returns `Ok(false)` when its elements are not on this page.
//! Controllers write only to their own elements, so mounting order does not
//! matter and one failure never blocks the rest.
//!
//! Listener closures are leaked with `Closure::forget`; they live as long as
//! the page, which is the lifetime every controller needs.

pub mod active_nav;
pub mod contact_form;
pub mod mobile_menu;
pub mod navbar_scroll;
pub mod project_filter;
pub mod scroll_reveal;
pub mod smooth_scroll;
pub mod stars_background;
pub mod theme_toggle;
pub mod typing_effect;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::{ConfigError, DomError};
use crate::util::lifecycle::dom_parsed;

/// Read the embedded config block, or defaults when the page has none.
pub fn load_config() -> Result<Config, ConfigError> {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match raw {
        Some(raw) => Config::from_json(&raw),
        None => Ok(Config::default()),
    }
}

/// Mount now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn mount_when_ready(config: Config) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("portfolio: no document, nothing to mount");
        return;
    };
    if dom_parsed(&document.ready_state()) {
        mount_all(&config);
        return;
    }
    let callback = Closure::once_into_js(move || mount_all(&config));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::warn!("portfolio: could not wait for DOMContentLoaded: {}", DomError::from(err));
    }
}

/// Mount every controller and log a summary.
pub fn mount_all(config: &Config) {
    let results = [
        ("theme", theme_toggle::mount(config)),
        ("stars", stars_background::mount(config)),
        ("menu", mobile_menu::mount()),
        ("reveal", scroll_reveal::mount(config)),
        ("smooth-scroll", smooth_scroll::mount()),
        ("active-nav", active_nav::mount(config)),
        ("navbar", navbar_scroll::mount(config)),
        ("filter", project_filter::mount()),
        ("contact", contact_form::mount(config)),
        ("typing", typing_effect::mount(config)),
    ];
    let total = results.len();
    let mut mounted = 0;
    for (name, result) in results {
        match result {
            Ok(true) => mounted += 1,
            Ok(false) => log::debug!("{name}: elements not on this page, skipped"),
            Err(err) => log::warn!("{name}: failed to mount: {err}"),
        }
    }
    log::info!("portfolio: mounted {mounted} of {total} components");
}

// ── DOM helpers ─────────────────────────────────────────────────

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::MissingWindow)
}

pub(crate) fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::MissingDocument)
}

pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub(crate) fn html(element: &Element) -> Result<&HtmlElement, DomError> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or(DomError::WrongElementType("HtmlElement"))
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    let class_list = element.class_list();
    if on {
        class_list.add_1(class)?;
    } else {
        class_list.remove_1(class)?;
    }
    Ok(())
}

/// Attach a page-lifetime listener.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
