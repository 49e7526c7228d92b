//! Star field: fills `.stars-container` with generated star elements.
//!
//! Each call appends a fresh field; it is meant to run once per page load.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{document, window};
use crate::config::Config;
use crate::consts::STARS_CONTAINER_SELECTOR;
use crate::error::DomError;
use crate::util::stars::{self, StarField};

pub fn mount(config: &Config) -> Result<bool, DomError> {
    let document = document(&window()?)?;
    let Some(container) = document.query_selector(STARS_CONTAINER_SELECTOR)? else {
        return Ok(false);
    };
    let mut rng = SmallRng::seed_from_u64(browser_seed());
    let field = stars::generate(&mut rng, config.star_count, config.shooting_star_count);
    append_field(&document, &container, &field)?;
    log::debug!("stars: appended {} elements", field.len());
    Ok(true)
}

/// Append every star in `field` to `container`.
pub fn append_field(document: &Document, container: &Element, field: &StarField) -> Result<(), DomError> {
    for star in &field.stars {
        let element = styled_div(document, &star.class_name(), &star.style_properties())?;
        container.append_child(&element)?;
    }
    for shooting in &field.shooting {
        let element = styled_div(document, shooting.class_name(), &shooting.style_properties())?;
        container.append_child(&element)?;
    }
    Ok(())
}

fn styled_div(document: &Document, class_name: &str, properties: &[(&str, String)]) -> Result<HtmlElement, DomError> {
    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongElementType("HtmlElement"))?;
    element.set_class_name(class_name);
    let style = element.style();
    for (property, value) in properties {
        style.set_property(property, value)?;
    }
    Ok(element)
}

fn browser_seed() -> u64 {
    js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits()
}
