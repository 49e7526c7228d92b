use super::*;
use crate::util::storage::MemoryStore;

const KEY: &str = "theme";

// =============================================================
// Start-up resolution
// =============================================================

#[test]
fn platform_dark_applies_without_stored_choice() {
    let manager = ThemeManager::resolve(MemoryStore::new(), KEY, true);
    assert_eq!(manager.theme(), Theme::Dark);
    assert!(!manager.has_explicit_choice());
}

#[test]
fn default_is_light_when_nothing_prefers_dark() {
    let manager = ThemeManager::resolve(MemoryStore::new(), KEY, false);
    assert_eq!(manager.theme(), Theme::Light);
}

#[test]
fn stored_light_wins_over_platform_dark() {
    let manager = ThemeManager::resolve(MemoryStore::new().with(KEY, "light"), KEY, true);
    assert_eq!(manager.theme(), Theme::Light);
    assert!(manager.has_explicit_choice());
}

#[test]
fn stored_garbage_is_treated_as_absent() {
    let manager = ThemeManager::resolve(MemoryStore::new().with(KEY, "sepia"), KEY, true);
    assert_eq!(manager.theme(), Theme::Dark);
    assert!(!manager.has_explicit_choice());
}

#[test]
fn resolve_does_not_write_the_store() {
    let manager = ThemeManager::resolve(MemoryStore::new(), KEY, true);
    assert_eq!(manager.store().get(KEY), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_twice_restores_original_and_persists_each_step() {
    let mut manager = ThemeManager::resolve(MemoryStore::new(), KEY, false);
    let original = manager.theme();

    let first = manager.toggle();
    assert_eq!(first, Theme::Dark);
    assert_eq!(manager.store().get(KEY).as_deref(), Some("dark"));

    let second = manager.toggle();
    assert_eq!(second, original);
    assert_eq!(manager.store().get(KEY).as_deref(), Some(original.as_str()));
}

#[test]
fn toggle_survives_rejected_write() {
    let mut manager = ThemeManager::resolve(MemoryStore::read_only(), KEY, false);
    assert_eq!(manager.toggle(), Theme::Dark);
    assert_eq!(manager.theme(), Theme::Dark);
    assert_eq!(manager.store().get(KEY), None);
}

// =============================================================
// Platform changes
// =============================================================

#[test]
fn platform_change_applies_until_user_chooses() {
    let mut manager = ThemeManager::resolve(MemoryStore::new(), KEY, false);
    assert_eq!(manager.platform_changed(true), Some(Theme::Dark));
    assert_eq!(manager.theme(), Theme::Dark);

    manager.toggle();
    assert_eq!(manager.theme(), Theme::Light);
    assert_eq!(manager.platform_changed(true), None);
    assert_eq!(manager.theme(), Theme::Light);
}

#[test]
fn platform_change_ignored_when_choice_was_stored_earlier() {
    let mut manager = ThemeManager::resolve(MemoryStore::new().with(KEY, "dark"), KEY, false);
    assert_eq!(manager.platform_changed(false), None);
    assert_eq!(manager.theme(), Theme::Dark);
}

// =============================================================
// Theme value
// =============================================================

#[test]
fn theme_round_trips_through_its_attribute_value() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(Theme::Light.to_string(), "light");
    assert!("Dark".parse::<Theme>().is_err());
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}
