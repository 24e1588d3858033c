//! External identity providers a username search can be scoped to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ServiceParseError;

/// A service whose users can be searched from the profile panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
	#[default]
	Keybase,
	Twitter,
	Facebook,
	GitHub,
	Reddit,
	HackerNews,
}

impl Service {
	/// All services in the order the filter row shows them.
	pub const ALL: [Service; 6] = [
		Service::Keybase,
		Service::Twitter,
		Service::Facebook,
		Service::GitHub,
		Service::Reddit,
		Service::HackerNews,
	];

	/// Human readable label.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Service::Keybase => "Keybase",
			Service::Twitter => "Twitter",
			Service::Facebook => "Facebook",
			Service::GitHub => "GitHub",
			Service::Reddit => "Reddit",
			Service::HackerNews => "Hacker News",
		}
	}

	/// Compact identifier used in configuration and serialized output.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Service::Keybase => "keybase",
			Service::Twitter => "twitter",
			Service::Facebook => "facebook",
			Service::GitHub => "github",
			Service::Reddit => "reddit",
			Service::HackerNews => "hackernews",
		}
	}

	/// The service after this one in [`Service::ALL`], wrapping around.
	#[must_use]
	pub fn next(self) -> Service {
		let index = self.position();
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	/// The service before this one in [`Service::ALL`], wrapping around.
	#[must_use]
	pub fn previous(self) -> Service {
		let index = self.position();
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|service| *service == self)
			.unwrap_or(0)
	}
}

impl fmt::Display for Service {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Service {
	type Err = ServiceParseError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized: String = value
			.trim()
			.chars()
			.filter(|ch| !matches!(ch, ' ' | '-' | '_'))
			.flat_map(char::to_lowercase)
			.collect();

		Service::ALL
			.into_iter()
			.find(|service| service.id() == normalized)
			.ok_or_else(|| ServiceParseError {
				name: value.to_string(),
				expected: Service::ALL
					.iter()
					.map(|service| service.id())
					.collect::<Vec<_>>()
					.join(", "),
			})
	}
}
