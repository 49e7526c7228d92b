//! Typing-effect cursor: types a phrase, pauses, deletes it at double speed,
//! then moves on to the next phrase, forever.
//!
//! [`TypingState::tick`] produces one frame of text plus the delay before the
//! next tick. Scheduling and cancellation live in `util::typing_task`.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts::{DEFAULT_TYPING_PAUSE_MS, DEFAULT_TYPING_RESTART_MS, DEFAULT_TYPING_SPEED_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay per typed character; deleting uses half of it.
    pub speed_ms: u32,
    /// Hold time once a phrase is fully typed.
    pub pause_ms: u32,
    /// Gap after a phrase is fully deleted.
    pub restart_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self { speed_ms: DEFAULT_TYPING_SPEED_MS, pause_ms: DEFAULT_TYPING_PAUSE_MS, restart_ms: DEFAULT_TYPING_RESTART_MS }
    }
}

/// One rendered step of the animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingState {
    phrases: Vec<Vec<char>>,
    timing: TypingTiming,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingState {
    /// `None` when there is nothing to type.
    pub fn new(phrases: &[String], timing: TypingTiming) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases.iter().map(|phrase| phrase.chars().collect()).collect(),
            timing,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance one character and report what to display.
    pub fn tick(&mut self) -> TypingFrame {
        let phrase = &self.phrases[self.phrase_index];
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(phrase.len());
        }
        let text = phrase[..self.char_index].iter().collect::<String>();

        let mut delay_ms = if self.deleting { self.timing.speed_ms / 2 } else { self.timing.speed_ms };
        if !self.deleting && self.char_index == phrase.len() {
            delay_ms = self.timing.pause_ms;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = self.timing.restart_ms;
        }
        TypingFrame { text, delay_ms }
    }
}
