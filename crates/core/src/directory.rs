//! In-memory user directory backing the reference state container.

use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use frizbee::{Config, match_list};
use serde::Deserialize;
use tracing::debug;

use crate::error::DirectoryError;
use crate::service::Service;

const SAMPLE_DIRECTORY: &str = include_str!("../data/sample_directory.json");

/// A user known to one of the external services.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
	pub username: String,
	#[serde(default)]
	pub full_name: Option<String>,
	pub service: Service,
	#[serde(default)]
	pub keybase_username: Option<String>,
}

impl UserRecord {
	pub fn new(username: impl Into<String>, service: Service) -> Self {
		Self {
			username: username.into(),
			full_name: None,
			service,
			keybase_username: None,
		}
	}

	#[must_use]
	pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
		self.full_name = Some(full_name.into());
		self
	}

	#[must_use]
	pub fn with_keybase_username(mut self, username: impl Into<String>) -> Self {
		self.keybase_username = Some(username.into());
		self
	}

	fn haystack(&self) -> String {
		match &self.full_name {
			Some(full_name) => format!("{} {}", self.username, full_name).to_lowercase(),
			None => self.username.to_lowercase(),
		}
	}
}

/// Searchable list of users across all services.
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
	records: Vec<UserRecord>,
}

impl UserDirectory {
	#[must_use]
	pub fn new(records: Vec<UserRecord>) -> Self {
		Self { records }
	}

	/// The directory bundled with the crate.
	pub fn sample() -> Result<Self, DirectoryError> {
		Self::from_json(SAMPLE_DIRECTORY, "(bundled sample)")
	}

	/// Load a JSON array of [`UserRecord`]s from `path`.
	pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
		let contents = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&contents, &path.display().to_string())
	}

	/// Parse a JSON array of [`UserRecord`]s. `origin` names the source in errors.
	pub fn from_json(contents: &str, origin: &str) -> Result<Self, DirectoryError> {
		let records: Vec<UserRecord> =
			serde_json::from_str(contents).map_err(|source| DirectoryError::Parse {
				origin: origin.to_string(),
				source,
			})?;
		debug!(origin, count = records.len(), "loaded user directory");
		Ok(Self { records })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	#[must_use]
	pub fn records(&self) -> &[UserRecord] {
		&self.records
	}

	/// Fuzzy-match `term` against users of `service`, best matches first.
	///
	/// Every character of the term has to appear, in order, in the username or
	/// full name. Ties keep directory order.
	#[must_use]
	pub fn search(&self, term: &str, service: Service, limit: usize) -> Vec<&UserRecord> {
		let needle = term.trim().to_lowercase();
		if needle.is_empty() {
			return Vec::new();
		}

		let candidates: Vec<&UserRecord> = self
			.records
			.iter()
			.filter(|record| record.service == service)
			.collect();
		let haystacks: Vec<String> = candidates.iter().map(|record| record.haystack()).collect();
		let haystacks: Vec<&str> = haystacks.iter().map(String::as_str).collect();

		let config = Config {
			prefilter: true,
			max_typos: Some(0),
			sort: false,
			..Config::default()
		};

		let mut ranked: Vec<(u16, usize)> = match_list(&needle, &haystacks, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.map(|entry| (entry.score, entry.index as usize))
			.collect();
		ranked.sort_by_key(|(score, index)| (Reverse(*score), *index));
		ranked.truncate(limit);

		ranked
			.into_iter()
			.map(|(_, index)| candidates[index])
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn directory() -> UserDirectory {
		UserDirectory::new(vec![
			UserRecord::new("alice", Service::Keybase).with_full_name("Alice Liddell"),
			UserRecord::new("bob", Service::Keybase),
			UserRecord::new("ali", Service::Twitter).with_keybase_username("ali"),
			UserRecord::new("zed", Service::Twitter),
		])
	}

	#[test]
	fn search_is_scoped_to_the_service() {
		let directory = directory();

		let keybase: Vec<_> = directory
			.search("ali", Service::Keybase, 10)
			.into_iter()
			.map(|record| record.username.as_str())
			.collect();
		assert_eq!(keybase, vec!["alice"]);

		let twitter: Vec<_> = directory
			.search("ali", Service::Twitter, 10)
			.into_iter()
			.map(|record| record.username.as_str())
			.collect();
		assert_eq!(twitter, vec!["ali"]);
	}

	#[test]
	fn blank_terms_match_nothing() {
		assert!(directory().search("   ", Service::Keybase, 10).is_empty());
	}

	#[test]
	fn limit_caps_results() {
		let records = (0..20)
			.map(|n| UserRecord::new(format!("user{n}"), Service::GitHub))
			.collect();
		let directory = UserDirectory::new(records);
		assert_eq!(directory.search("user", Service::GitHub, 5).len(), 5);
	}

	#[test]
	fn bundled_sample_parses() {
		let sample = UserDirectory::sample().expect("sample directory");
		assert!(!sample.is_empty());
		assert!(
			sample
				.records()
				.iter()
				.any(|record| record.service == Service::HackerNews)
		);
	}

	#[test]
	fn loads_from_file_and_reports_parse_errors() {
		let mut good = tempfile::NamedTempFile::new().unwrap();
		write!(good, r#"[{{"username": "pg", "service": "hackernews"}}]"#).unwrap();
		let directory = UserDirectory::from_path(good.path()).unwrap();
		assert_eq!(directory.len(), 1);
		assert_eq!(directory.records()[0].service, Service::HackerNews);

		let mut bad = tempfile::NamedTempFile::new().unwrap();
		write!(bad, "{{ not json").unwrap();
		let err = UserDirectory::from_path(bad.path()).unwrap_err();
		assert!(matches!(err, DirectoryError::Parse { .. }));

		let missing = UserDirectory::from_path(Path::new("/definitely/not/here.json"));
		assert!(matches!(missing, Err(DirectoryError::Io { .. })));
	}
}
