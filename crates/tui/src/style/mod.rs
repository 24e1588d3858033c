//! Visual styling for the panel.
//!
//! Themes are plain `const` values; [`by_name`] resolves the names accepted by
//! the configuration layer.

mod builtins;
mod theme;

pub use builtins::{LIGHT, MONO, SLATE};
pub use theme::Theme;

/// The theme used when nothing else is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Names of the bundled themes.
#[must_use]
pub fn names() -> &'static [&'static str] {
	&["slate", "light", "mono"]
}

/// Look up a bundled theme, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	match name.trim().to_ascii_lowercase().as_str() {
		"slate" | "default" | "dark" => Some(SLATE),
		"light" => Some(LIGHT),
		"mono" | "monochrome" => Some(MONO),
		_ => None,
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
