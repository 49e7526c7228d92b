//! Mobile navigation menu open/close state.
//!
//! The open flag lives in the DOM as the `active` class on the panel; this
//! module only decides transitions and the hamburger bar styling for each.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Inline style for one of the three hamburger bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStyle {
    Transform(&'static str),
    Opacity(&'static str),
}

impl BarStyle {
    pub fn property(self) -> &'static str {
        match self {
            Self::Transform(_) => "transform",
            Self::Opacity(_) => "opacity",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Transform(value) | Self::Opacity(value) => value,
        }
    }
}

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle::Transform("rotate(45deg) translate(5px, 5px)"),
    BarStyle::Opacity("0"),
    BarStyle::Transform("rotate(-45deg) translate(5px, -5px)"),
];

const CLOSED_BARS: [BarStyle; 3] = [BarStyle::Transform("none"), BarStyle::Opacity("1"), BarStyle::Transform("none")];

/// Styles for the top, middle, and bottom bars (a cross when open).
pub fn bar_styles(open: bool) -> [BarStyle; 3] {
    if open { OPEN_BARS } else { CLOSED_BARS }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

/// Where a document-level click landed relative to the menu widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Panel,
    NavLink,
    Outside,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// State after a click anywhere on the page.
    ///
    /// The toggle's own listener handles [`ClickTarget::Toggle`], so the
    /// document-level view of it is a no-op. Plain clicks inside the panel
    /// keep it open.
    #[must_use]
    pub fn after_click(self, target: ClickTarget) -> Self {
        match target {
            ClickTarget::Toggle | ClickTarget::Panel => self,
            ClickTarget::NavLink | ClickTarget::Outside => Self { open: false },
        }
    }

    pub fn bars(self) -> [BarStyle; 3] {
        bar_styles(self.open)
    }
}
