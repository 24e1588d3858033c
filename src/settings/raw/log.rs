use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "psearch.log";

/// `[log]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(self) -> (String, PathBuf) {
		let level = self.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string());
		let file = self.file.unwrap_or_else(default_log_file);
		(level, file)
	}
}

/// `<data dir>/psearch.log`, or the temp dir when no data dir is known.
fn default_log_file() -> PathBuf {
	app_dirs::get_data_dir()
		.unwrap_or_else(|_| env::temp_dir())
		.join(LOG_FILE_NAME)
}
