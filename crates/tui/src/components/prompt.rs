use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::hits::HitMap;
use super::input::QueryInput;
use crate::style::Theme;
use crate::view::InputRow;

const PROMPT: &str = "› ";

/// Argument bundle for rendering the input row.
#[derive(Debug)]
pub struct InputContext<'a> {
	pub row: &'a InputRow,
	pub input: &'a mut QueryInput,
	pub throbber_state: &'a ThrobberState,
	pub pending_label: &'a str,
	pub theme: &'a Theme,
}

/// Render prompt, text input, pending indicator and dismiss control.
pub fn render_input_row(
	frame: &mut Frame,
	area: Rect,
	ctx: InputContext<'_>,
	hits: &mut HitMap,
) {
	let InputContext {
		row,
		input,
		throbber_state,
		pending_label,
		theme,
	} = ctx;

	let dismiss_width = row.dismiss.symbol.width() as u16 + 1;
	let [prompt_area, input_area, dismiss_area] = Layout::horizontal([
		Constraint::Length(PROMPT.width() as u16),
		Constraint::Min(1),
		Constraint::Length(dismiss_width),
	])
	.areas(area);

	frame.render_widget(Paragraph::new(PROMPT).style(theme.prompt), prompt_area);
	input.render(frame, input_area, theme);
	if row.searching {
		render_pending(frame, input_area, pending_label, throbber_state, theme);
	}

	let dismiss = Rect {
		x: dismiss_area.x.saturating_add(1),
		width: dismiss_area.width.saturating_sub(1),
		..dismiss_area
	};
	frame.render_widget(
		Paragraph::new(row.dismiss.symbol).style(theme.muted_style()),
		dismiss,
	);
	hits.push(dismiss, row.dismiss.on_click.clone());
}

/// Right-align a spinner and label in `area`, without overwriting typed text.
fn render_pending(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || label.is_empty() {
		return;
	}

	let muted = theme.muted_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(label.to_string(), muted),
	]);
	let line_width = line.width() as u16;

	let buffer = frame.buffer_mut();
	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.filter(|x| {
			buffer
				.cell((*x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();

	let mut start_x = area.right().saturating_sub(line_width).max(area.left());
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right() - start_x;
	buffer.set_line(start_x, row, &line, max_width);
}
