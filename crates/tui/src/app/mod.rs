//! Application state and behaviour for the interactive panel.
//!
//! The [`App`] owns the view-model and the terminal-side widget state. The
//! submodules split it into input handling, rendering and state.

mod actions;
mod render;
mod state;

pub use state::App;

#[cfg(test)]
mod tests;
