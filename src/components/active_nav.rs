//! Highlights the nav link for the section under the scroll position.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Window};

use super::{document, listen, query_all, set_class, window};
use crate::config::Config;
use crate::consts::{ACTIVE_CLASS, NAV_LINK_SELECTOR, SECTION_SELECTOR};
use crate::error::DomError;
use crate::util::scroll::{SectionSpan, active_section, link_targets};

pub fn mount(config: &Config) -> Result<bool, DomError> {
    let window = window()?;
    let document = document(&window)?;
    let sections = query_all(&document, SECTION_SELECTOR)?;
    if sections.is_empty() {
        return Ok(false);
    }
    let links = query_all(&document, NAV_LINK_SELECTOR)?;
    let offset = config.active_nav_offset;

    let scroll_window = window.clone();
    listen(&window, "scroll", move |_: Event| {
        if let Err(err) = highlight(&scroll_window, &sections, &links, offset) {
            log::warn!("active-nav: {err}");
        }
    })?;
    Ok(true)
}

/// Layout is read fresh on every call; a scroll position between sections
/// leaves the current highlight alone.
fn highlight(window: &Window, sections: &[Element], links: &[Element], offset: f64) -> Result<(), DomError> {
    let spans = sections.iter().filter_map(section_span).collect::<Vec<_>>();
    let Some(id) = active_section(&spans, window.scroll_y()?, offset) else {
        return Ok(());
    };
    for link in links {
        set_class(link, ACTIVE_CLASS, link_targets(link.get_attribute("href").as_deref(), id))?;
    }
    Ok(())
}

fn section_span(section: &Element) -> Option<SectionSpan> {
    let html = section.dyn_ref::<HtmlElement>()?;
    Some(SectionSpan {
        id: section.id(),
        top: f64::from(html.offset_top()),
        height: f64::from(html.offset_height()),
    })
}
