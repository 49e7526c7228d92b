//! Scroll reveal: adds `active` to `.reveal` elements as they enter the
//! viewport, checking at most once per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, Window};

use super::{document, listen, query_all, set_class, window};
use crate::config::Config;
use crate::consts::{ACTIVE_CLASS, REVEAL_SELECTOR};
use crate::error::DomError;
use crate::state::reveal::{FrameGate, RevealTracker};

struct Reveal {
    elements: Vec<Element>,
    tracker: RefCell<RevealTracker>,
    gate: RefCell<FrameGate>,
    offset: f64,
}

impl Reveal {
    fn check(&self, window: &Window) -> Result<(), DomError> {
        let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let newly = self.tracker.borrow_mut().check(viewport_height, self.offset, |index| {
            self.elements
                .get(index)
                .map_or(f64::INFINITY, |element| element.get_bounding_client_rect().top())
        });
        for index in newly {
            if let Some(element) = self.elements.get(index) {
                set_class(element, ACTIVE_CLASS, true)?;
            }
        }
        Ok(())
    }

    /// Queue a check for the next frame unless one is already queued.
    fn schedule(self: &Rc<Self>, window: &Window) {
        if self.tracker.borrow().all_revealed() || !self.gate.borrow_mut().request() {
            return;
        }
        let this = Rc::clone(self);
        let frame_window = window.clone();
        let callback = Closure::once_into_js(move || {
            this.gate.borrow_mut().complete();
            if let Err(err) = this.check(&frame_window) {
                log::warn!("reveal: check failed: {err}");
            }
        });
        if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
            self.gate.borrow_mut().complete();
            log::warn!("reveal: could not request frame: {}", DomError::from(err));
        }
    }
}

pub fn mount(config: &Config) -> Result<bool, DomError> {
    let window = window()?;
    let elements = query_all(&document(&window)?, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(false);
    }
    let reveal = Rc::new(Reveal {
        tracker: RefCell::new(RevealTracker::new(elements.len())),
        elements,
        gate: RefCell::new(FrameGate::default()),
        offset: config.reveal_offset,
    });
    reveal.check(&window)?;

    let scroll_window = window.clone();
    listen(&window, "scroll", move |_: Event| reveal.schedule(&scroll_window))?;
    Ok(true)
}
