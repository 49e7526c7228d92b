//! Scroll-position math for reveal, anchor scrolling, nav highlighting, and
//! the navbar shadow.
//!
//! All positions are CSS pixels. Inputs are read from the DOM by the caller on
//! every event; nothing here caches layout.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{NAVBAR_SHADOW, NO_SHADOW};

/// Whether an element whose viewport-relative top is `top` has crossed the
/// line `offset` px above the viewport bottom.
pub fn crossed_reveal_line(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// Element id referenced by a same-page `href`, or `None` for a bare `#` and
/// anything that is not a fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that lands `target_top` (document-relative) just below a
/// fixed navbar of `navbar_height` px.
pub fn anchor_scroll_offset(target_top: f64, navbar_height: Option<f64>) -> f64 {
    target_top - navbar_height.unwrap_or(0.0)
}

/// Vertical extent of a page section with an id.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Id of the section containing `scroll_y + offset`. When spans overlap the
/// last one in document order wins; gaps yield `None`.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<&str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Whether a nav link `href` points at section `id`.
pub fn link_targets(href: Option<&str>, id: &str) -> bool {
    href.and_then(fragment_target) == Some(id)
}

/// Inline `box-shadow` for the navbar at `scroll_y`.
pub fn navbar_shadow(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold { NAVBAR_SHADOW } else { NO_SHADOW }
}
