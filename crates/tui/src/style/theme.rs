use ratatui::style::{Color, Modifier, Style};

/// Styles for the panel's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Panel border and title.
	pub header: Style,
	/// Highlighted result row.
	pub row_highlight: Style,
	/// Filter label and input prompt.
	pub prompt: Style,
	/// Placeholders, hints and secondary text.
	pub empty: Style,
	/// The selected service chip and matched usernames.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn chip_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn chip_selected_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn username_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.empty
	}
}
