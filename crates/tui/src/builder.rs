use std::time::Duration;

use anyhow::Result;
use psearch_core::{
	AppState, Clock, DEFAULT_DEBOUNCE, DEFAULT_PLACEHOLDER, SearchViewModel, Service,
	SystemClock, UserDirectory,
};

use crate::App;
use crate::config::UiLabels;
use crate::outcome::SearchOutcome;
use crate::style::Theme;

/// Builder for a profile search panel over a user directory.
#[derive(Debug)]
pub struct SearchPanel {
	directory: UserDirectory,
	service: Service,
	initial_query: String,
	placeholder: String,
	debounce: Duration,
	labels: UiLabels,
	theme: Option<Theme>,
}

impl SearchPanel {
	pub fn new(directory: UserDirectory) -> Self {
		Self {
			directory,
			service: Service::default(),
			initial_query: String::new(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			debounce: DEFAULT_DEBOUNCE,
			labels: UiLabels::default(),
			theme: None,
		}
	}

	#[must_use]
	pub fn with_service(mut self, service: Service) -> Self {
		self.service = service;
		self
	}

	/// Text the input starts with. A non-empty query is searched on open.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_debounce(mut self, window: Duration) -> Self {
		self.debounce = window;
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Build the panel reading time from the system clock.
	#[must_use]
	pub fn into_app(self) -> App {
		self.into_app_with_clock(SystemClock)
	}

	/// Build the panel reading time from `clock`.
	#[must_use]
	pub fn into_app_with_clock<C: Clock>(self, clock: C) -> App<C> {
		let view_model = SearchViewModel::new(AppState::new(self.directory), clock)
			.with_debounce(self.debounce)
			.with_placeholder(self.placeholder)
			.with_service(self.service)
			.with_initial_text(self.initial_query);

		let mut app = App::new(view_model);
		app.set_labels(self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Run the panel in the terminal.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.into_app();
		crate::run(&mut app)
	}
}
