/// Text rendered around the search panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title shown on the panel border.
	pub title: String,
	/// Label preceding the service chips.
	pub filter_label: String,
	/// Shown when a query produced no results.
	pub empty_label: String,
	/// Shown while a debounced search is waiting to fire.
	pub pending_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Search people".to_string(),
			filter_label: "Filter:".to_string(),
			empty_label: "No results".to_string(),
			pending_label: "searching…".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_filter_label(mut self, label: impl Into<String>) -> Self {
		self.filter_label = label.into();
		self
	}
}
