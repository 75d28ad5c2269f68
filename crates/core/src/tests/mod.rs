//! Behavioral tests for the home screen
//!
//! BDD-style tests using given-when-then naming. They exercise the screen
//! through its public surface: the rendered tree, `tap`, and intent dispatch.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

pub mod welcome_behaviors;

use std::cell::RefCell;

use crate::route::RoutePath;
use crate::router::Router;

/// Router double that records every navigation.
#[derive(Default)]
pub struct RecordingRouter {
    calls: RefCell<Vec<String>>,
}

impl RecordingRouter {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, path: &RoutePath) {
        self.calls.borrow_mut().push(path.as_str().to_string());
    }
}
