//! Reference [`Store`] backed by a [`UserDirectory`].
//!
//! `AppState` keeps just enough of an application around the panel to make it
//! usable on its own: a navigation stack, result slots keyed by destination,
//! and the profile the user clicked last.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::directory::{UserDirectory, UserRecord};
use crate::query::{ResultDestination, SearchResultId};
use crate::service::Service;
use crate::store::{Action, ResultEntry, Store};

/// Maximum number of results delivered per search.
pub const MAX_RESULTS: usize = 50;

/// Views the navigation stack can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
	Home,
	ProfileSearch,
}

/// In-memory application state.
#[derive(Debug)]
pub struct AppState {
	directory: UserDirectory,
	routes: Vec<Route>,
	slots: HashMap<ResultDestination, Vec<SearchResultId>>,
	entries: HashMap<SearchResultId, ResultEntry>,
	clicked: Option<ResultEntry>,
	searches: usize,
}

impl AppState {
	/// State with the profile search open on top of the home view.
	#[must_use]
	pub fn new(directory: UserDirectory) -> Self {
		Self {
			directory,
			routes: vec![Route::Home, Route::ProfileSearch],
			slots: HashMap::new(),
			entries: HashMap::new(),
			clicked: None,
			searches: 0,
		}
	}

	#[must_use]
	pub fn current_route(&self) -> Route {
		self.routes.last().copied().unwrap_or(Route::Home)
	}

	#[must_use]
	pub fn is_search_open(&self) -> bool {
		self.current_route() == Route::ProfileSearch
	}

	/// The profile chosen through [`Action::UserClick`], if any.
	#[must_use]
	pub fn clicked_profile(&self) -> Option<&ResultEntry> {
		self.clicked.as_ref()
	}

	/// Number of searches executed so far.
	#[must_use]
	pub fn search_count(&self) -> usize {
		self.searches
	}

	#[must_use]
	pub fn results(&self, destination: ResultDestination) -> &[SearchResultId] {
		self.slots
			.get(&destination)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	fn run_search(&mut self, term: &str, destination: ResultDestination, service: Service) {
		self.searches += 1;
		let matches: Vec<ResultEntry> = self
			.directory
			.search(term, service, MAX_RESULTS)
			.into_iter()
			.map(entry_for)
			.collect();
		debug!(
			term,
			%destination,
			%service,
			count = matches.len(),
			"search completed"
		);

		let ids = matches.iter().map(|entry| entry.id.clone()).collect();
		for entry in matches {
			self.entries.insert(entry.id.clone(), entry);
		}
		self.slots.insert(destination, ids);
	}

	fn navigate_up(&mut self) {
		if self.routes.len() > 1 {
			let popped = self.routes.pop();
			debug!(?popped, "navigated up");
		}
	}

	fn user_click(&mut self, username: &str) {
		let id = SearchResultId::new(username);
		let entry = self
			.entries
			.get(&id)
			.cloned()
			.unwrap_or_else(|| ResultEntry::bare(id, Service::Keybase));
		info!(username = %entry.username, service = %entry.service, "profile selected");
		self.clicked = Some(entry);
	}
}

impl Store for AppState {
	fn dispatch(&mut self, action: Action) {
		match action {
			Action::ClearSearchResults => {
				self.slots.clear();
				self.entries.clear();
			}
			Action::Search {
				term,
				destination,
				service,
			} => self.run_search(&term, destination, service),
			Action::NavigateUp => self.navigate_up(),
			Action::UserClick { username } => self.user_click(&username),
		}
	}

	fn profile_search_result_ids(&self) -> Vec<SearchResultId> {
		self.results(ResultDestination::Profile).to_vec()
	}

	fn result_entry(&self, id: &SearchResultId) -> Option<ResultEntry> {
		self.entries.get(id).cloned()
	}
}

/// Keybase users are identified by their username; other services are
/// qualified so the same handle on two services stays distinct.
fn entry_for(record: &UserRecord) -> ResultEntry {
	let id = match record.service {
		Service::Keybase => SearchResultId::new(record.username.clone()),
		service => SearchResultId::new(format!("{}@{}", record.username, service.id())),
	};
	ResultEntry {
		id,
		username: record.username.clone(),
		full_name: record.full_name.clone(),
		service: record.service,
		keybase_username: record.keybase_username.clone(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> AppState {
		AppState::new(UserDirectory::new(vec![
			UserRecord::new("alice", Service::Keybase).with_full_name("Alice Liddell"),
			UserRecord::new("alison", Service::Twitter).with_keybase_username("alice"),
			UserRecord::new("bob", Service::Keybase),
		]))
	}

	fn search(term: &str, service: Service) -> Action {
		Action::Search {
			term: term.to_string(),
			destination: ResultDestination::Profile,
			service,
		}
	}

	#[test]
	fn search_fills_the_profile_slot() {
		let mut state = state();
		state.dispatch(search("ali", Service::Keybase));

		let ids = state.profile_search_result_ids();
		assert_eq!(ids, vec![SearchResultId::new("alice")]);
		let entry = state.result_entry(&ids[0]).unwrap();
		assert_eq!(entry.full_name.as_deref(), Some("Alice Liddell"));
		assert_eq!(state.search_count(), 1);
	}

	#[test]
	fn non_keybase_ids_are_qualified() {
		let mut state = state();
		state.dispatch(search("ali", Service::Twitter));

		let ids = state.profile_search_result_ids();
		assert_eq!(ids, vec![SearchResultId::new("alison@twitter")]);
		let entry = state.result_entry(&ids[0]).unwrap();
		assert_eq!(entry.keybase_username.as_deref(), Some("alice"));
	}

	#[test]
	fn empty_term_clears_the_slot() {
		let mut state = state();
		state.dispatch(search("ali", Service::Keybase));
		state.dispatch(search("", Service::Keybase));
		assert!(state.profile_search_result_ids().is_empty());
	}

	#[test]
	fn clear_search_results_empties_everything() {
		let mut state = state();
		state.dispatch(search("ali", Service::Keybase));
		state.dispatch(Action::ClearSearchResults);
		assert!(state.profile_search_result_ids().is_empty());
		assert_eq!(state.result_entry(&SearchResultId::new("alice")), None);
	}

	#[test]
	fn navigate_up_never_pops_the_root() {
		let mut state = state();
		assert!(state.is_search_open());

		state.dispatch(Action::NavigateUp);
		assert_eq!(state.current_route(), Route::Home);
		state.dispatch(Action::NavigateUp);
		assert_eq!(state.current_route(), Route::Home);
	}

	#[test]
	fn user_click_resolves_known_entries() {
		let mut state = state();
		state.dispatch(search("ali", Service::Twitter));
		state.dispatch(Action::UserClick {
			username: "alison@twitter".into(),
		});
		let clicked = state.clicked_profile().unwrap();
		assert_eq!(clicked.username, "alison");
		assert_eq!(clicked.service, Service::Twitter);

		state.dispatch(Action::UserClick {
			username: "stranger".into(),
		});
		assert_eq!(state.clicked_profile().unwrap().username, "stranger");
	}
}
