use psearch_core::ResultEntry;
use serde::Serialize;

/// How the panel was left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// A profile was chosen rather than the panel dismissed.
	pub accepted: bool,
	/// The chosen profile.
	pub selection: Option<ResultEntry>,
	/// Query text at the moment the panel was left.
	pub query: String,
}
