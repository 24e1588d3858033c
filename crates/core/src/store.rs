//! The state container the profile panel dispatches into.

use serde::Serialize;

use crate::query::{ResultDestination, SearchResultId};
use crate::service::Service;

/// Mutations the panel can request from the state container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
	/// Drop any previously fetched results.
	ClearSearchResults,
	/// Search `service` for `term`, delivering results to `destination`.
	Search {
		term: String,
		destination: ResultDestination,
		service: Service,
	},
	/// Pop the current view.
	NavigateUp,
	/// A result was chosen.
	UserClick { username: String },
}

/// Display data for a single result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
	pub id: SearchResultId,
	pub username: String,
	pub full_name: Option<String>,
	pub service: Service,
	/// Keybase account linked to a non-Keybase result, when known.
	pub keybase_username: Option<String>,
}

impl ResultEntry {
	/// Fallback entry for an id the container cannot resolve.
	#[must_use]
	pub fn bare(id: SearchResultId, service: Service) -> Self {
		Self {
			username: id.as_str().to_string(),
			id,
			full_name: None,
			service,
			keybase_username: None,
		}
	}
}

/// Shared application state as seen by the panel.
///
/// All mutations go through [`Store::dispatch`], which serializes them. The
/// selectors are read-only views used to derive props.
pub trait Store {
	fn dispatch(&mut self, action: Action);

	/// Ids currently held in the profile result slot, in display order.
	fn profile_search_result_ids(&self) -> Vec<SearchResultId>;

	/// Resolve display data for `id`.
	fn result_entry(&self, id: &SearchResultId) -> Option<ResultEntry>;
}
