use psearch_core::{Clock, SearchResultId, Store};
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::App;
use crate::view::UiAction;

impl<C: Clock> App<C> {
	/// Process a key press.
	pub fn handle_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.dispatch(UiAction::Close),
			KeyCode::Enter => {
				if let Some(id) = self.highlighted_id() {
					self.dispatch(UiAction::SelectResult(id));
				}
			}
			KeyCode::Tab => {
				let next = self.view_model.query().service.next();
				self.dispatch(UiAction::SelectService(next));
			}
			KeyCode::BackTab => {
				let previous = self.view_model.query().service.previous();
				self.dispatch(UiAction::SelectService(previous));
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.input.input(key) {
					let text = self.input.text().to_string();
					self.dispatch(UiAction::ChangeText(text));
				}
			}
		}
	}

	/// Process a mouse event against the regions recorded by the last draw.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(action) = self.hits.action_at(mouse.column, mouse.row).cloned() {
					self.dispatch(action);
				}
			}
			MouseEventKind::ScrollUp if self.over_results(mouse.column, mouse.row) => {
				self.move_selection_up();
			}
			MouseEventKind::ScrollDown if self.over_results(mouse.column, mouse.row) => {
				self.move_selection_down();
			}
			_ => {}
		}
	}

	fn highlighted_id(&self) -> Option<SearchResultId> {
		let selected = self.list_state.selected()?;
		self.view_model
			.store()
			.profile_search_result_ids()
			.into_iter()
			.nth(selected)
	}

	fn over_results(&self, column: u16, row: u16) -> bool {
		self.results_area
			.is_some_and(|area| area.contains(Position::new(column, row)))
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < self.result_count()
		{
			self.list_state.select(Some(selected + 1));
		}
	}
}
