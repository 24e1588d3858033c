//! The profile search view-model.
//!
//! [`SearchViewModel`] is constructed once per panel instance. It owns the
//! local query and the debounce timer, dispatches into an injected [`Store`],
//! and reads time from an injected [`Clock`]. Nothing here blocks: debounced
//! searches are released by [`SearchViewModel::pump`], which the event loop
//! calls every iteration.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::clock::Clock;
use crate::debounce::Debouncer;
use crate::query::{ResultDestination, SearchQuery, SearchResultId};
use crate::service::Service;
use crate::store::{Action, ResultEntry, Store};

/// Quiet period after the last keystroke before a search is dispatched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Placeholder shown in the empty text input.
pub const DEFAULT_PLACEHOLDER: &str = "Type someone";

type QueryListener = Box<dyn FnMut(&SearchQuery)>;

/// Everything the presentation layer needs to draw the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchProps {
	/// Resolved results, one per id, in store order.
	pub results: Vec<ResultEntry>,
	pub search_text: String,
	pub selected_service: Service,
	pub placeholder: String,
	/// A debounced search has been scheduled but not dispatched yet.
	pub search_pending: bool,
}

impl SearchProps {
	pub fn ids(&self) -> impl Iterator<Item = &SearchResultId> {
		self.results.iter().map(|entry| &entry.id)
	}
}

/// Adapter between user actions, local query state and the shared store.
pub struct SearchViewModel<S, C> {
	store: S,
	clock: C,
	query: SearchQuery,
	placeholder: String,
	destination: ResultDestination,
	debouncer: Debouncer<SearchQuery>,
	listener: Option<QueryListener>,
}

impl<S: Store, C: Clock> SearchViewModel<S, C> {
	#[must_use]
	pub fn new(store: S, clock: C) -> Self {
		Self {
			store,
			clock,
			query: SearchQuery::default(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			destination: ResultDestination::Profile,
			debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
			listener: None,
		}
	}

	#[must_use]
	pub fn with_debounce(mut self, window: Duration) -> Self {
		self.debouncer = Debouncer::new(window);
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_service(mut self, service: Service) -> Self {
		self.query.service = service;
		self
	}

	/// Seed the query text. A non-empty seed is searched right away.
	#[must_use]
	pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
		self.query.text = text.into();
		if !self.query.text.is_empty() {
			let SearchQuery { text, service } = self.query.clone();
			self.search(&text, service);
		}
		self
	}

	/// Register the listener notified after every local query change.
	pub fn set_query_listener(&mut self, listener: impl FnMut(&SearchQuery) + 'static) {
		self.listener = Some(Box::new(listener));
	}

	/// Dispatch a search for `term` on `service` right now.
	pub fn search(&mut self, term: &str, service: Service) {
		debug!(term, %service, destination = %self.destination, "dispatching search");
		self.store.dispatch(Action::Search {
			term: term.to_string(),
			destination: self.destination,
			service,
		});
	}

	/// Update the text and schedule a debounced search for it.
	pub fn change_text(&mut self, text: impl Into<String>) {
		self.query.text = text.into();
		self.notify();
		let now = self.clock.now();
		self.debouncer.schedule(self.query.clone(), now);
	}

	/// Switch the service and search it immediately with the current text.
	///
	/// A pending debounced search is dropped: it carries the previous service
	/// and the immediate search already covers the latest text.
	pub fn select_service(&mut self, service: Service) {
		self.query.service = service;
		self.notify();
		if self.debouncer.cancel() {
			debug!("dropped pending search in favour of service change");
		}
		let text = self.query.text.clone();
		self.search(&text, service);
	}

	/// Navigate back, report the chosen user, then reset text and results.
	pub fn select_result(&mut self, id: &SearchResultId) {
		self.debouncer.cancel();
		self.store.dispatch(Action::NavigateUp);
		self.store.dispatch(Action::UserClick {
			username: id.as_str().to_string(),
		});
		self.query.text.clear();
		self.notify();
		self.store.dispatch(Action::ClearSearchResults);
	}

	/// Navigate back without touching the query.
	pub fn close(&mut self) {
		self.store.dispatch(Action::NavigateUp);
	}

	/// Dispatch the debounced search if its window has elapsed.
	///
	/// Returns `true` when a search was dispatched.
	pub fn pump(&mut self) -> bool {
		let now = self.clock.now();
		match self.debouncer.take_due(now) {
			Some(SearchQuery { text, service }) => {
				self.search(&text, service);
				true
			}
			None => false,
		}
	}

	/// When the pending debounced search becomes due, if one is scheduled.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	#[must_use]
	pub fn query(&self) -> &SearchQuery {
		&self.query
	}

	#[must_use]
	pub fn debounce_window(&self) -> Duration {
		self.debouncer.window()
	}

	/// Derive presentation props from the store and the local query.
	#[must_use]
	pub fn props(&self) -> SearchProps {
		let results = self
			.store
			.profile_search_result_ids()
			.into_iter()
			.map(|id| {
				self.store
					.result_entry(&id)
					.unwrap_or_else(|| ResultEntry::bare(id, self.query.service))
			})
			.collect();

		SearchProps {
			results,
			search_text: self.query.text.clone(),
			selected_service: self.query.service,
			placeholder: self.placeholder.clone(),
			search_pending: self.debouncer.is_pending(),
		}
	}

	#[must_use]
	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut S {
		&mut self.store
	}

	fn notify(&mut self) {
		if let Some(listener) = self.listener.as_mut() {
			listener(&self.query);
		}
	}
}

impl<S: fmt::Debug, C: fmt::Debug> fmt::Debug for SearchViewModel<S, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchViewModel")
			.field("store", &self.store)
			.field("clock", &self.clock)
			.field("query", &self.query)
			.field("placeholder", &self.placeholder)
			.field("debouncer", &self.debouncer)
			.finish_non_exhaustive()
	}
}
