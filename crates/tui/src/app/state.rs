use std::cell::RefCell;
use std::rc::Rc;

use psearch_core::{AppState, Clock, SearchViewModel, Store, SystemClock};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use crate::components::{HitMap, QueryInput};
use crate::config::UiLabels;
use crate::outcome::SearchOutcome;
use crate::style::Theme;
use crate::view::{SearchView, UiAction};

/// The running panel: view-model plus terminal widget state.
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
	pub(super) view_model: SearchViewModel<AppState, C>,
	pub(super) input: QueryInput,
	pub(super) labels: UiLabels,
	pub(super) theme: Theme,
	pub(super) list_state: ListState,
	pub(super) hits: HitMap,
	pub(super) results_area: Option<Rect>,
	pub(super) throbber_state: ThrobberState,
	/// Text the view-model set since the input was last synced.
	pending_text: Rc<RefCell<Option<String>>>,
	exit_query: String,
}

impl<C: Clock> App<C> {
	pub fn new(mut view_model: SearchViewModel<AppState, C>) -> Self {
		let pending_text = Rc::new(RefCell::new(None));
		let listener_text = Rc::clone(&pending_text);
		view_model.set_query_listener(move |query| {
			*listener_text.borrow_mut() = Some(query.text.clone());
		});

		let props = view_model.props();
		let input = QueryInput::new(props.search_text.clone(), props.placeholder.clone());
		let exit_query = props.search_text;

		let mut app = Self {
			view_model,
			input,
			labels: UiLabels::default(),
			theme: Theme::default(),
			list_state: ListState::default(),
			hits: HitMap::default(),
			results_area: None,
			throbber_state: ThrobberState::default(),
			pending_text,
			exit_query,
		};
		app.ensure_selection();
		app
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn view_model(&self) -> &SearchViewModel<AppState, C> {
		&self.view_model
	}

	/// Current layout tree.
	#[must_use]
	pub fn view(&self) -> SearchView {
		SearchView::build(&self.view_model.props(), &self.labels)
	}

	/// Advance timers: release a due debounced search and animate the spinner.
	pub fn tick(&mut self) {
		if self.view_model.pump() {
			self.list_state.select(None);
			self.ensure_selection();
		}
		if self.view_model.next_deadline().is_some() {
			self.throbber_state.calc_next();
		}
	}

	/// Route an action from the layout tree to the view-model.
	pub fn dispatch(&mut self, action: UiAction) {
		debug!(?action, "ui action");
		match action {
			UiAction::ChangeText(text) => self.view_model.change_text(text),
			UiAction::SelectService(service) => {
				self.view_model.select_service(service);
				self.list_state.select(None);
			}
			UiAction::SelectResult(id) => {
				self.exit_query = self.view_model.query().text.clone();
				self.view_model.select_result(&id);
			}
			UiAction::Close => {
				self.exit_query = self.view_model.query().text.clone();
				self.view_model.close();
			}
		}
		self.sync_input();
		self.ensure_selection();
	}

	/// The outcome once the panel has been navigated away from.
	#[must_use]
	pub fn outcome(&self) -> Option<SearchOutcome> {
		let store = self.view_model.store();
		if store.is_search_open() {
			return None;
		}
		let selection = store.clicked_profile().cloned();
		Some(SearchOutcome {
			accepted: selection.is_some(),
			selection,
			query: self.exit_query.clone(),
		})
	}

	pub(crate) fn result_count(&self) -> usize {
		self.view_model.store().profile_search_result_ids().len()
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.result_count();
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			None => self.list_state.select(Some(0)),
			Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	fn sync_input(&mut self) {
		let pending = self.pending_text.borrow_mut().take();
		if let Some(text) = pending
			&& text != self.input.text()
		{
			self.input.set_text(text);
		}
	}
}
