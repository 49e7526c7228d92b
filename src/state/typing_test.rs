use super::*;

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn timing() -> TypingTiming {
    TypingTiming { speed_ms: 100, pause_ms: 2_000, restart_ms: 500 }
}

#[test]
fn empty_phrase_list_is_rejected() {
    assert!(TypingState::new(&[], timing()).is_none());
}

#[test]
fn types_pauses_deletes_then_advances() {
    let mut state = TypingState::new(&phrases(&["ab", "c"]), timing()).unwrap();
    let frames = (0..7).map(|_| state.tick()).collect::<Vec<_>>();

    let expected: [(&str, u32); 7] = [
        ("a", 100),
        ("ab", 2_000),
        ("a", 50),
        ("", 500),
        ("c", 2_000),
        ("", 500),
        ("a", 100),
    ];
    for (frame, (text, delay)) in frames.iter().zip(expected) {
        assert_eq!(frame.text, text);
        assert_eq!(frame.delay_ms, delay);
    }
}

#[test]
fn phrase_index_wraps_cyclically() {
    let mut state = TypingState::new(&phrases(&["x", "y"]), timing()).unwrap();
    assert_eq!(state.phrase_index(), 0);
    state.tick();
    state.tick();
    assert_eq!(state.phrase_index(), 1);
    state.tick();
    state.tick();
    assert_eq!(state.phrase_index(), 0);
}

#[test]
fn deleting_flag_set_at_full_phrase() {
    let mut state = TypingState::new(&phrases(&["hi"]), timing()).unwrap();
    state.tick();
    assert!(!state.is_deleting());
    state.tick();
    assert!(state.is_deleting());
}

#[test]
fn multibyte_phrases_step_by_character() {
    let mut state = TypingState::new(&phrases(&["héllo ✨"]), timing()).unwrap();
    let typed = (0..7).map(|_| state.tick().text).collect::<Vec<_>>();
    assert_eq!(typed[1], "hé");
    assert_eq!(typed[6], "héllo ✨");
}

#[test]
fn empty_phrase_in_list_pauses_then_moves_on() {
    let mut state = TypingState::new(&phrases(&["", "z"]), timing()).unwrap();
    let first = state.tick();
    assert_eq!(first, TypingFrame { text: String::new(), delay_ms: 2_000 });
    let second = state.tick();
    assert_eq!(second, TypingFrame { text: String::new(), delay_ms: 500 });
    assert_eq!(state.tick().text, "z");
}

#[test]
fn default_timing_matches_hero_defaults() {
    assert_eq!(TypingTiming::default(), timing());
}
