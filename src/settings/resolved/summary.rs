use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let directory = config
		.directory
		.as_ref()
		.map_or_else(|| "(bundled sample)".to_string(), |path| path.display().to_string());
	let _ = writeln!(out, "  Directory: {directory}");
	let _ = writeln!(out, "  Service: {}", config.service);
	let _ = writeln!(out, "  Debounce: {} ms", config.debounce.as_millis());
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  Placeholder: {}", config.placeholder);
	let _ = writeln!(out, "  Title: {}", config.labels.title);
	let _ = writeln!(out, "  Filter label: {}", config.labels.filter_label);
	let _ = writeln!(out, "  UI theme: {}", config.theme_name);
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	let _ = writeln!(out, "  Log file: {}", config.log_file.display());
	out
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use psearch_core::Service;
	use psearch_tui::{Theme, UiLabels};

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			directory: Some(PathBuf::from("/srv/users.json")),
			service: Service::HackerNews,
			debounce: Duration::from_millis(250),
			initial_query: "pg".into(),
			placeholder: "Who?".into(),
			labels: UiLabels::default(),
			theme_name: "mono".into(),
			theme: Theme::default(),
			log_level: "debug".into(),
			log_file: PathBuf::from("/tmp/psearch.log"),
		};

		let summary = render_summary(&config);
		assert!(summary.contains("Directory: /srv/users.json"));
		assert!(summary.contains("Service: Hacker News"));
		assert!(summary.contains("Debounce: 250 ms"));
		assert!(summary.contains("Initial query: pg"));
		assert!(summary.contains("UI theme: mono"));
	}
}
