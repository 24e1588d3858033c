use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use psearch_core::{DEFAULT_DEBOUNCE, Service};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, parse_service, parse_theme};

mod log;
mod search;
mod ui;

use log::LogSection;
use search::SearchSection;
use ui::UiSection;

const DEFAULT_THEME: &str = "slate";

/// Configuration as read from files and the environment, before CLI overrides
/// and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Narrow the raw values into a [`ResolvedConfig`], filling defaults and
	/// reporting where any invalid value came from.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			service: detect_source(
				cli.service.is_some(),
				self.search.service.is_some(),
				"PSEARCH__SEARCH__SERVICE",
				"--service",
				"search.service",
			),
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"PSEARCH__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"PSEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let service = match &self.search.service {
			Some(value) => parse_service(value, sources.source_for_service())?,
			None => Service::default(),
		};
		let theme_name = self.ui.theme.clone().unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = parse_theme(&theme_name, sources.source_for_theme())?;
		let debounce = self
			.search
			.debounce_ms
			.map_or(DEFAULT_DEBOUNCE, Duration::from_millis);

		let placeholder = self.ui.placeholder();
		let labels = self.ui.labels();
		let (log_level, log_file) = self.log.resolve();

		let config = ResolvedConfig {
			directory: self.search.directory,
			service,
			debounce,
			initial_query: self.search.initial_query.unwrap_or_default(),
			placeholder,
			labels,
			theme_name,
			theme,
			log_level,
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
