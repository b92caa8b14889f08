//! Fixtures for in-memory workflow tests.

use rstest::fixture;

pub use crate::test_helpers::{App, Notice, PASSWORD, today};

/// Provides fresh wiring with nobody signed in.
#[fixture]
pub fn app() -> App {
    App::new()
}
