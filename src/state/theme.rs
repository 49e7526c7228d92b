//! Light/dark theme resolution and persistence.
//!
//! Resolution order at start-up: stored preference, then the platform's
//! `prefers-color-scheme`, then [`Theme::Light`]. Only an explicit toggle
//! writes the store, so platform changes keep applying until the visitor
//! makes a choice of their own.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_platform(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Owns the active theme and the store it is persisted in.
pub struct ThemeManager<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Resolve the start-up theme without writing the store.
    pub fn resolve(store: S, key: impl Into<String>, platform_prefers_dark: bool) -> Self {
        let key = key.into();
        let current = stored_theme(&store, &key).unwrap_or_else(|| Theme::from_platform(platform_prefers_dark));
        Self { store, key, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Whether the visitor has a valid persisted choice.
    pub fn has_explicit_choice(&self) -> bool {
        stored_theme(&self.store, &self.key).is_some()
    }

    /// Flip the theme and persist it. A rejected write keeps the new theme
    /// for this page view.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            log::warn!("theme: could not persist {}: {err}", self.current);
        }
        self.current
    }

    /// Follow a platform color-scheme change. Returns the theme to apply, or
    /// `None` when an explicit choice takes precedence.
    pub fn platform_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        self.current = Theme::from_platform(prefers_dark);
        Some(self.current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn stored_theme<S: PreferenceStore>(store: &S, key: &str) -> Option<Theme> {
    let raw = store.get(key)?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::warn!("theme: ignoring stored value: {err}");
            None
        }
    }
}
