use anyhow::{Context, Result};
use psearch_core::UserDirectory;
use psearch_tui::{SearchOutcome, SearchPanel};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Loads the directory named by the configuration and runs the panel over it.
#[derive(Debug)]
pub(crate) struct SearchWorkflow {
	panel: SearchPanel,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			directory,
			service,
			debounce,
			initial_query,
			placeholder,
			labels,
			theme,
			..
		} = config;

		let directory = match directory {
			Some(path) => UserDirectory::from_path(&path)
				.with_context(|| format!("failed to load user directory {}", path.display()))?,
			None => UserDirectory::sample().context("failed to load the bundled directory")?,
		};
		info!(users = directory.len(), %service, "user directory loaded");

		let panel = SearchPanel::new(directory)
			.with_service(service)
			.with_debounce(debounce)
			.with_placeholder(placeholder)
			.with_initial_query(initial_query)
			.with_labels(labels)
			.with_theme(theme);
		Ok(Self { panel })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.panel.run()
	}
}
