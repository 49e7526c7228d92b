use super::*;

const CARDS: [Option<&str>; 5] = [Some("web,rust"), Some("python"), Some("rust"), None, Some("Rust")];

#[test]
fn all_shows_every_card() {
    assert_eq!(visibility(ALL, CARDS), vec![true; 5]);
}

#[test]
fn label_shows_exactly_cards_containing_it() {
    assert_eq!(visibility("rust", CARDS), vec![true, false, true, false, false]);
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(visibility("Rust", CARDS), vec![false, false, false, false, true]);
}

#[test]
fn labels_are_not_trimmed() {
    assert!(!card_matches("rust", Some("web, rust")));
    assert!(card_matches(" rust", Some("web, rust")));
}

#[test]
fn card_without_categories_only_matches_all() {
    assert!(!card_matches("web", None));
    assert!(card_matches(ALL, None));
}

#[test]
fn unknown_label_hides_everything() {
    assert_eq!(visibility("go", CARDS), vec![false; 5]);
}

#[test]
fn click_makes_button_sole_active() {
    let mut state = FilterState::default();
    state.click(2, "python", CARDS);
    assert!(state.is_active_button(2));

    let shown = state.click(0, ALL, CARDS);
    assert!(state.is_active_button(0));
    assert!(!state.is_active_button(2));
    assert_eq!(shown, vec![true; 5]);
}
