//! Contact form: local validation and a self-dismissing inline message.
//! Nothing is sent over the network.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FormData, HtmlFormElement};

use super::{document, listen, window};
use crate::config::Config;
use crate::consts::{CONTACT_FORM_SELECTOR, FORM_MESSAGE_CLASS};
use crate::error::DomError;
use crate::state::contact::{self, ContactSubmission, MessageSlot, SubmitOutcome};

struct ContactForm {
    form: HtmlFormElement,
    slot: RefCell<MessageSlot<Element>>,
    dismiss_ms: u32,
}

impl ContactForm {
    fn submit(self: &Rc<Self>) -> Result<(), DomError> {
        let outcome = contact::submit(&self.read()?);
        self.show(&outcome)?;
        if outcome.reset_form {
            self.form.reset();
        }
        Ok(())
    }

    fn read(&self) -> Result<ContactSubmission, DomError> {
        let data = FormData::new_with_form(&self.form)?;
        let field = |name: &str| data.get(name).as_string();
        Ok(ContactSubmission { name: field("name"), email: field("email"), message: field("message") })
    }

    fn show(self: &Rc<Self>, outcome: &SubmitOutcome) -> Result<(), DomError> {
        let document = self.form.owner_document().ok_or(DomError::MissingDocument)?;
        let message = document.create_element("div")?;
        message.set_class_name(&format!("{FORM_MESSAGE_CLASS} {}", outcome.kind.class_name()));
        message.set_text_content(Some(&outcome.text));
        message.set_attribute("style", &outcome.kind.css_text())?;

        let (ticket, previous) = self.slot.borrow_mut().replace(message.clone());
        if let Some(previous) = previous {
            previous.remove();
        }
        self.form.append_child(&message)?;

        let this = Rc::clone(self);
        Timeout::new(self.dismiss_ms, move || {
            let expired = this.slot.borrow_mut().expire(ticket);
            if let Some(expired) = expired {
                expired.remove();
            }
        })
        .forget();
        Ok(())
    }
}

pub fn mount(config: &Config) -> Result<bool, DomError> {
    let Some(form) = document(&window()?)?.query_selector(CONTACT_FORM_SELECTOR)? else {
        return Ok(false);
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| DomError::WrongElementType("HtmlFormElement"))?;
    let contact = Rc::new(ContactForm {
        form: form.clone(),
        slot: RefCell::new(MessageSlot::default()),
        dismiss_ms: config.message_dismiss_ms,
    });

    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        if let Err(err) = contact.submit() {
            log::warn!("contact: {err}");
        }
    })?;
    Ok(true)
}
