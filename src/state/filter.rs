//! Project card filtering by category label.
//!
//! Matching is exact and case-sensitive; labels are not trimmed, so
//! `data-category="web, rust"` carries the label `" rust"`.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter label that shows every card.
pub const ALL: &str = "all";

/// Whether a card with the given `data-category` value passes `filter`.
pub fn card_matches(filter: &str, categories: Option<&str>) -> bool {
    if filter == ALL {
        return true;
    }
    categories.is_some_and(|raw| raw.split(',').any(|label| label == filter))
}

/// Per-card visibility for one filter click, in card order.
pub fn visibility<'a>(filter: &str, cards: impl IntoIterator<Item = Option<&'a str>>) -> Vec<bool> {
    cards
        .into_iter()
        .map(|categories| card_matches(filter, categories))
        .collect()
}

/// Which filter button is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    active_button: Option<usize>,
}

impl FilterState {
    /// Record a click on button `index` and return per-card visibility.
    pub fn click<'a>(&mut self, index: usize, filter: &str, cards: impl IntoIterator<Item = Option<&'a str>>) -> Vec<bool> {
        self.active_button = Some(index);
        visibility(filter, cards)
    }

    /// Whether button `index` is the sole active one.
    pub fn is_active_button(&self, index: usize) -> bool {
        self.active_button == Some(index)
    }
}
