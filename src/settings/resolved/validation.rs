use psearch_core::Service;
use psearch_tui::Theme;
use psearch_tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(crate) fn parse_service(value: &str, origin: SettingSource) -> Result<Service, ConfigError> {
	value.parse().map_err(|err: psearch_core::ServiceParseError| {
		ConfigError::invalid("search.service", value, origin, err.to_string())
	})
}

pub(crate) fn parse_theme(value: &str, origin: SettingSource) -> Result<Theme, ConfigError> {
	style::by_name(value).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			value,
			origin,
			format!("expected one of {}", style::names().join(", ")),
		)
	})
}

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.debounce.is_zero() {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			config.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			"must be greater than zero",
		));
	}

	Ok(())
}
