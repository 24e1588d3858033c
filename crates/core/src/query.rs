use std::fmt;

use serde::{Deserialize, Serialize};

use crate::service::Service;

/// Transient query owned by the view-model: the typed text and the service it
/// is scoped to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
	pub text: String,
	pub service: Service,
}

impl SearchQuery {
	#[must_use]
	pub fn new(text: impl Into<String>, service: Service) -> Self {
		Self {
			text: text.into(),
			service,
		}
	}
}

/// Opaque handle to a result held by the state container.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResultId(String);

impl SearchResultId {
	#[must_use]
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SearchResultId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for SearchResultId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

/// Tags the slot a search delivers its results to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultDestination {
	/// Results shown by the profile search panel.
	Profile,
}

impl ResultDestination {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			ResultDestination::Profile => "profile:updateSearchResults",
		}
	}
}

impl fmt::Display for ResultDestination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
