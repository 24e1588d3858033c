use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[search]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) directory: Option<PathBuf>,
	pub(super) service: Option<String>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) initial_query: Option<String>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(directory) = cli.directory.clone() {
			self.directory = Some(directory);
		}
		if let Some(service) = cli.service.clone() {
			self.service = Some(service);
		}
		if let Some(millis) = cli.debounce_ms {
			self.debounce_ms = Some(millis);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}
}
