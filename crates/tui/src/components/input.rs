use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// Single-line text input backed by `tui-textarea`.
#[derive(Debug)]
pub struct QueryInput {
	textarea: TextArea<'static>,
	placeholder: String,
}

impl QueryInput {
	pub fn new(text: impl Into<String>, placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		Self {
			textarea: build_textarea(text.into(), &placeholder),
			placeholder,
		}
	}

	/// Current contents of the input.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_newline(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Replace the contents, leaving the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.textarea = build_textarea(text.into(), &self.placeholder);
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
		self.textarea.set_placeholder_text(self.placeholder.clone());
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		self.textarea.set_placeholder_style(theme.muted_style());
		frame.render_widget(&self.textarea, area);
	}
}

fn build_textarea(text: String, placeholder: &str) -> TextArea<'static> {
	let mut textarea = TextArea::new(vec![text]);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_placeholder_text(placeholder.to_string());
	textarea.move_cursor(CursorMove::End);
	textarea
}

fn is_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
