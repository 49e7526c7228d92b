//! Mobile navigation menu: hamburger toggle, close on nav link, close on
//! outside click.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use super::{document, elements, html, listen, query_all, set_class, window};
use crate::consts::{ACTIVE_CLASS, MENU_BAR_SELECTOR, MENU_TOGGLE_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_SELECTOR};
use crate::error::DomError;
use crate::state::menu::{ClickTarget, MenuState};

struct Menu {
    toggle: Element,
    panel: Element,
}

impl Menu {
    /// The panel's `active` class is the single source of truth.
    fn state(&self) -> MenuState {
        MenuState::new(self.panel.class_list().contains(ACTIVE_CLASS))
    }

    fn classify(&self, event: &Event) -> ClickTarget {
        let target = event.target();
        let node = target.as_ref().and_then(|target| target.dyn_ref::<Node>());
        if self.toggle.contains(node) {
            ClickTarget::Toggle
        } else if self.panel.contains(node) {
            ClickTarget::Panel
        } else {
            ClickTarget::Outside
        }
    }

    fn transition(&self, next: MenuState) {
        if next == self.state() {
            return;
        }
        if let Err(err) = self.render(next) {
            log::warn!("menu: could not update: {err}");
        }
    }

    fn render(&self, next: MenuState) -> Result<(), DomError> {
        set_class(&self.panel, ACTIVE_CLASS, next.open)?;
        set_class(&self.toggle, ACTIVE_CLASS, next.open)?;
        let bars = elements(&self.toggle.query_selector_all(MENU_BAR_SELECTOR)?);
        for (bar, style) in bars.iter().zip(next.bars()) {
            html(bar)?.style().set_property(style.property(), style.value())?;
        }
        Ok(())
    }
}

pub fn mount() -> Result<bool, DomError> {
    let document = document(&window()?)?;
    let (Some(toggle), Some(panel)) = (
        document.query_selector(MENU_TOGGLE_SELECTOR)?,
        document.query_selector(NAV_MENU_SELECTOR)?,
    ) else {
        return Ok(false);
    };
    let menu = Rc::new(Menu { toggle, panel });

    {
        let menu = Rc::clone(&menu);
        listen(&menu.toggle.clone(), "click", move |_: Event| {
            menu.transition(menu.state().toggled());
        })?;
    }

    for link in query_all(&document, NAV_LINK_SELECTOR)? {
        let menu = Rc::clone(&menu);
        listen(&link, "click", move |_: Event| {
            menu.transition(menu.state().after_click(ClickTarget::NavLink));
        })?;
    }

    listen(&document, "click", move |event: Event| {
        let target = menu.classify(&event);
        menu.transition(menu.state().after_click(target));
    })?;
    Ok(true)
}
