use psearch_core::Clock;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use super::App;
use crate::components::{InputContext, render_filter_row, render_input_row, render_results};

impl<C: Clock> App<C> {
	/// Draw the panel into the whole frame.
	pub fn draw(&mut self, frame: &mut Frame) {
		let view = self.view();
		self.input.set_placeholder(view.input_row.placeholder.clone());
		self.hits.clear();

		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		frame.render_widget(Clear, area);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border_style())
			.title(format!(" {} ", view.title));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [input_area, filter_area, results_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(inner);

		let input_ctx = InputContext {
			row: &view.input_row,
			input: &mut self.input,
			throbber_state: &self.throbber_state,
			pending_label: &self.labels.pending_label,
			theme: &self.theme,
		};
		render_input_row(frame, input_area, input_ctx, &mut self.hits);
		render_filter_row(
			frame,
			filter_area,
			&view.filter_row,
			&self.theme,
			&mut self.hits,
		);
		let rows_area = render_results(
			frame,
			results_area,
			&view.results,
			&mut self.list_state,
			&self.theme,
			&mut self.hits,
		);
		self.results_area = Some(rows_area);
	}
}
