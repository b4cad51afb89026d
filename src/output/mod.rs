//! Output formatting for check results.
//!
//! - [`terminal`] - Terminal output with colors

mod terminal;

pub use terminal::render;
