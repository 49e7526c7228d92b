//! Selectors, class names, and default tunables shared across components.

// ── Selectors ───────────────────────────────────────────────────

pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const STARS_CONTAINER_SELECTOR: &str = ".stars-container";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const MENU_BAR_SELECTOR: &str = "span";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

// ── Attributes and classes ──────────────────────────────────────

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const FILTER_ATTRIBUTE: &str = "data-filter";
pub const CATEGORY_ATTRIBUTE: &str = "data-category";
pub const ACTIVE_CLASS: &str = "active";
pub const STAR_CLASS: &str = "star";
pub const SHOOTING_STAR_CLASS: &str = "shooting-star";
pub const FORM_MESSAGE_CLASS: &str = "form-message";

/// Media query reporting the platform's dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Defaults ────────────────────────────────────────────────────

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_STAR_COUNT: usize = 150;
pub const DEFAULT_SHOOTING_STAR_COUNT: usize = 3;

/// Distance in px above the viewport bottom an element must cross to reveal.
pub const DEFAULT_REVEAL_OFFSET: f64 = 100.0;

/// Added to `scrollY` before matching it against section spans.
pub const DEFAULT_ACTIVE_NAV_OFFSET: f64 = 100.0;

/// `scrollY` beyond which the navbar gets its shadow.
pub const DEFAULT_NAVBAR_SHADOW_THRESHOLD: f64 = 50.0;

pub const DEFAULT_MESSAGE_DISMISS_MS: u32 = 5_000;

pub const DEFAULT_TYPING_SPEED_MS: u32 = 100;
pub const DEFAULT_TYPING_PAUSE_MS: u32 = 2_000;
pub const DEFAULT_TYPING_RESTART_MS: u32 = 500;

// ── Inline styles ───────────────────────────────────────────────

pub const NAVBAR_SHADOW: &str = "var(--shadow-md)";
pub const NO_SHADOW: &str = "none";
pub const CARD_REVEAL_ANIMATION: &str = "fadeInUp 0.5s ease forwards";
