//! Project filter buttons: show cards whose `data-category` list contains
//! the clicked label, or every card for `all`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event};

use super::{document, html, listen, query_all, set_class, window};
use crate::consts::{
    ACTIVE_CLASS, CARD_REVEAL_ANIMATION, CATEGORY_ATTRIBUTE, FILTER_ATTRIBUTE, FILTER_BUTTON_SELECTOR,
    PROJECT_CARD_SELECTOR,
};
use crate::error::DomError;
use crate::state::filter::FilterState;

struct Filter {
    buttons: Vec<Element>,
    cards: Vec<Element>,
    state: RefCell<FilterState>,
}

impl Filter {
    fn apply(&self, index: usize, label: &str) -> Result<(), DomError> {
        let categories = self
            .cards
            .iter()
            .map(|card| card.get_attribute(CATEGORY_ATTRIBUTE))
            .collect::<Vec<_>>();
        let mut state = self.state.borrow_mut();
        let shown = state.click(index, label, categories.iter().map(Option::as_deref));

        for (position, button) in self.buttons.iter().enumerate() {
            set_class(button, ACTIVE_CLASS, state.is_active_button(position))?;
        }
        for (card, visible) in self.cards.iter().zip(shown) {
            let style = html(card)?.style();
            if visible {
                style.set_property("display", "block")?;
                style.set_property("animation", CARD_REVEAL_ANIMATION)?;
            } else {
                style.set_property("display", "none")?;
            }
        }
        Ok(())
    }
}

pub fn mount() -> Result<bool, DomError> {
    let document = document(&window()?)?;
    let buttons = query_all(&document, FILTER_BUTTON_SELECTOR)?;
    if buttons.is_empty() {
        return Ok(false);
    }
    let cards = query_all(&document, PROJECT_CARD_SELECTOR)?;
    let filter = Rc::new(Filter { buttons, cards, state: RefCell::new(FilterState::default()) });

    for (index, button) in filter.buttons.iter().enumerate() {
        let Some(label) = button.get_attribute(FILTER_ATTRIBUTE) else {
            log::debug!("filter: button {index} has no {FILTER_ATTRIBUTE}, not wired");
            continue;
        };
        let filter_for_click = Rc::clone(&filter);
        listen(button, "click", move |_: Event| {
            if let Err(err) = filter_for_click.apply(index, &label) {
                log::warn!("filter: {err}");
            }
        })?;
    }
    Ok(true)
}
