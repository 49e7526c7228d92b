//! Smooth scrolling for same-page anchors, offset by the fixed navbar.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{document, listen, query_all, window};
use crate::consts::{ANCHOR_SELECTOR, NAVBAR_SELECTOR};
use crate::error::DomError;
use crate::util::scroll::{anchor_scroll_offset, fragment_target};

pub fn mount() -> Result<bool, DomError> {
    let anchors = query_all(&document(&window()?)?, ANCHOR_SELECTOR)?;
    if anchors.is_empty() {
        return Ok(false);
    }
    for anchor in anchors {
        let href = anchor.get_attribute("href");
        listen(&anchor, "click", move |event: Event| {
            // Dangling and bare `#` anchors do nothing rather than jump.
            event.prevent_default();
            if let Err(err) = scroll_to_fragment(href.as_deref()) {
                log::warn!("smooth-scroll: {err}");
            }
        })?;
    }
    Ok(true)
}

fn scroll_to_fragment(href: Option<&str>) -> Result<(), DomError> {
    let Some(id) = href.and_then(fragment_target) else {
        return Ok(());
    };
    let window = window()?;
    let document = document(&window)?;
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("smooth-scroll: no element with id {id:?}");
        return Ok(());
    };

    let navbar_height = document
        .query_selector(NAVBAR_SELECTOR)?
        .as_ref()
        .and_then(|navbar| navbar.dyn_ref::<HtmlElement>())
        .map(|navbar| f64::from(navbar.offset_height()));
    let top = document_top(&target, window.scroll_y()?);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_offset(top, navbar_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn document_top(element: &Element, scroll_y: f64) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y
}
