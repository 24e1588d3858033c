//! Terminal front end for the `psearch` profile search panel.
//!
//! [`SearchView`] is the pure layout tree derived from
//! [`SearchProps`](psearch_core::SearchProps). The [`App`] owns the view-model,
//! renders the tree with ratatui and routes key and mouse events back into the
//! view-model. [`SearchPanel`] is the public entry point that wires a directory
//! into a runnable panel.

mod app;
mod builder;
pub mod components;
mod config;
mod outcome;
mod runtime;
pub mod style;
mod view;

pub use app::App;
pub use builder::SearchPanel;
pub use config::UiLabels;
pub use outcome::SearchOutcome;
pub use runtime::run;
pub use style::{Theme, default_theme};
pub use view::{
	Control, FilterRow, InputRow, ResultItem, ResultsList, SearchView, ServiceChip, UiAction,
};
