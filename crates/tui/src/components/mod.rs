//! Widgets the panel is drawn from.

/// Service chips below the input.
pub mod filter;
/// Click routing for rendered regions.
pub mod hits;
/// Text input wrapper.
pub mod input;
/// Input row with pending indicator and dismiss control.
pub mod prompt;
/// Results list.
pub mod results;

pub use filter::render_filter_row;
pub use hits::HitMap;
pub use input::QueryInput;
pub use prompt::{InputContext, render_input_row};
pub use results::render_results;
