//! Behavioral tests for the UI layer
//!
//! BDD-style tests using given-when-then naming. They run natively, so they
//! cover the pieces that do not touch the DOM.

#![allow(clippy::unwrap_used)]

pub mod navigation_behaviors;
pub mod session_behaviors;
