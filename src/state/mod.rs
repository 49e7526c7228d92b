//! Per-component state machines.
//!
//! DESIGN
//! ======
//! Each controller owns exactly one of these and nothing is shared between
//! them. None of these modules touch the DOM; the `components` bindings read
//! the page, call in here, and write the answer back.

pub mod contact;
pub mod filter;
pub mod menu;
pub mod reveal;
pub mod theme;
pub mod typing;
