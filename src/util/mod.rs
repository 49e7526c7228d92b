//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate geometry, randomness, storage, and scheduling from
//! the DOM bindings so the behavior can be tested without a browser.

pub mod lifecycle;
pub mod scroll;
pub mod stars;
pub mod storage;
pub mod typing_task;
