//! Theme toggle: applies `data-theme` on `<html>` and keeps it in sync with
//! the toggle control and the platform color scheme.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MediaQueryList, MediaQueryListEvent};

use super::{document, listen, window};
use crate::config::Config;
use crate::consts::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_TOGGLE_SELECTOR};
use crate::error::DomError;
use crate::state::theme::{Theme, ThemeManager};
use crate::util::storage::LocalStore;

type SharedManager = Rc<RefCell<ThemeManager<LocalStore>>>;

pub fn mount(config: &Config) -> Result<bool, DomError> {
    let window = window()?;
    let document = document(&window)?;
    let root = document.document_element().ok_or(DomError::MissingDocument)?;

    let media = window.match_media(DARK_SCHEME_QUERY)?;
    let prefers_dark = media.as_ref().is_some_and(MediaQueryList::matches);
    let manager: SharedManager = Rc::new(RefCell::new(ThemeManager::resolve(
        LocalStore,
        config.theme_storage_key.clone(),
        prefers_dark,
    )));
    apply(&root, manager.borrow().theme())?;
    log::debug!("theme: starting in {}", manager.borrow().theme());

    if let Some(toggle) = document.query_selector(THEME_TOGGLE_SELECTOR)? {
        let manager = Rc::clone(&manager);
        let root = root.clone();
        listen(&toggle, "click", move |_: Event| {
            let theme = manager.borrow_mut().toggle();
            report(apply(&root, theme));
        })?;
    }

    if let Some(media) = media {
        listen(&media, "change", move |event: Event| {
            let prefers_dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .is_some_and(MediaQueryListEvent::matches);
            let next = manager.borrow_mut().platform_changed(prefers_dark);
            if let Some(theme) = next {
                report(apply(&root, theme));
            }
        })?;
    }
    Ok(true)
}

fn apply(root: &Element, theme: Theme) -> Result<(), DomError> {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}

fn report(result: Result<(), DomError>) {
    if let Err(err) = result {
        log::warn!("theme: could not apply: {err}");
    }
}
