use psearch_core::DEFAULT_PLACEHOLDER;
use psearch_tui::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) placeholder: Option<String>,
	pub(super) title: Option<String>,
	pub(super) filter_label: Option<String>,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(label) = cli.filter_label.clone() {
			self.filter_label = Some(label);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn placeholder(&self) -> String {
		self.placeholder
			.clone()
			.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
	}

	pub(super) fn labels(&self) -> UiLabels {
		let mut labels = UiLabels::default();
		if let Some(title) = &self.title {
			labels = labels.with_title(title.clone());
		}
		if let Some(label) = &self.filter_label {
			labels = labels.with_filter_label(label.clone());
		}
		labels
	}
}
