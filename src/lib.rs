//! # cosmic-portfolio
//!
//! Browser behavior layer for the cosmic portfolio static site. The HTML and
//! CSS are rendered ahead of time; this crate is compiled to WebAssembly and
//! attaches small, independent controllers to whatever parts of the page are
//! present (theme toggle, star field, mobile menu, scroll reveal, anchor
//! scrolling, nav highlighting, project filter, contact form, typing effect).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure per-component state machines (theme, menu, reveal, filter, contact, typing) |
//! | [`util`] | Pure helpers: document lifecycle, scroll geometry, star generation, storage seam, typing task |
//! | [`config`] | Page-level configuration parsed from an embedded JSON block |
//! | [`consts`] | Selectors, class names, and default tunables |
//! | [`error`] | Error types shared by the DOM bindings |
//! | `components` | web-sys bindings that wire the cores to the DOM (`hydrate` only) |
//!
//! Everything outside `components` compiles on any target so the behavior can
//! be unit-tested natively.

pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod components;

#[cfg(feature = "hydrate")]
pub use components::typing_effect::{TypingEffect, start_typing_effect, stop_typing_effect};

/// WASM entry point: install logging and mount every component once the DOM
/// is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let loaded = components::load_config();
    let level = loaded.as_ref().map_or(log::Level::Info, config::Config::log_level);
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already initialised: {err}");
    }
    let config = loaded.unwrap_or_else(|err| {
        log::warn!("invalid page config, using defaults: {err}");
        config::Config::default()
    });
    components::mount_when_ready(config);
}
