//! Scroll-reveal bookkeeping.
//!
//! Reveal is one-way: once an element is marked it stays marked, and the
//! binding stops measuring it. Scroll checks are coalesced onto animation
//! frames through [`FrameGate`].

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::util::scroll::crossed_reveal_line;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|done| *done)
    }

    /// Indices still waiting to be revealed.
    pub fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, done)| !**done)
            .map(|(index, _)| index)
    }

    /// Mark every pending element whose top has crossed the reveal line.
    ///
    /// `top_of` is only called for pending elements. Returns the indices newly
    /// revealed by this pass.
    pub fn check(&mut self, viewport_height: f64, offset: f64, mut top_of: impl FnMut(usize) -> f64) -> Vec<usize> {
        let newly = self
            .pending()
            .filter(|index| crossed_reveal_line(top_of(*index), viewport_height, offset))
            .collect::<Vec<_>>();
        for index in &newly {
            self.revealed[*index] = true;
        }
        newly
    }
}

/// At most one frame-aligned check in flight; extra requests are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback (or when scheduling failed).
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(self) -> bool {
        self.pending
    }
}
