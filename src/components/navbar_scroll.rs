//! Navbar shadow once the page is scrolled.

use web_sys::{Event, HtmlElement, Window};

use super::{document, html, listen, window};
use crate::config::Config;
use crate::consts::NAVBAR_SELECTOR;
use crate::error::DomError;
use crate::util::scroll::navbar_shadow;

pub fn mount(config: &Config) -> Result<bool, DomError> {
    let window = window()?;
    let Some(navbar) = document(&window)?.query_selector(NAVBAR_SELECTOR)? else {
        return Ok(false);
    };
    let navbar = html(&navbar)?.clone();
    let threshold = config.navbar_shadow_threshold;

    let scroll_window = window.clone();
    listen(&window, "scroll", move |_: Event| {
        if let Err(err) = update(&scroll_window, &navbar, threshold) {
            log::warn!("navbar: {err}");
        }
    })?;
    Ok(true)
}

fn update(window: &Window, navbar: &HtmlElement, threshold: f64) -> Result<(), DomError> {
    let shadow = navbar_shadow(window.scroll_y()?, threshold);
    navbar.style().set_property("box-shadow", shadow)?;
    Ok(())
}
