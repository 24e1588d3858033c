use std::path::PathBuf;
use std::time::Duration;

use psearch_core::Service;
use psearch_tui::{Theme, UiLabels};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::{parse_service, parse_theme};

/// Application-ready configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// JSON directory to load; the bundled sample when unset.
	pub directory: Option<PathBuf>,
	pub service: Service,
	pub debounce: Duration,
	pub initial_query: String,
	pub placeholder: String,
	pub labels: UiLabels,
	pub theme_name: String,
	pub theme: Theme,
	pub log_level: String,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
