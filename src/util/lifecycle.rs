//! Document lifecycle checks.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// `document.readyState` while the parser is still running.
pub const LOADING: &str = "loading";

/// Whether controllers can mount now rather than on `DOMContentLoaded`.
///
/// Both `interactive` and `complete` mean the DOM tree is parsed.
pub fn dom_parsed(ready_state: &str) -> bool {
    ready_state != LOADING
}
