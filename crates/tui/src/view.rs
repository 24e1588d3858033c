//! Declarative layout tree for the search panel.
//!
//! [`SearchView::build`] is a pure function of its inputs: the same props and
//! labels always yield an equal tree. Interactive nodes carry the [`UiAction`]
//! they trigger instead of callbacks, and the app routes those actions to the
//! view-model.

use psearch_core::{SearchProps, SearchResultId, Service};

/// What an interactive node asks the view-model to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
	ChangeText(String),
	SelectService(Service),
	SelectResult(SearchResultId),
	Close,
}

/// A clickable glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
	pub symbol: &'static str,
	pub on_click: UiAction,
}

/// Text input plus the dismiss control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRow {
	pub text: String,
	pub placeholder: String,
	pub dismiss: Control,
	/// A debounced search is waiting on the quiet period.
	pub searching: bool,
}

impl InputRow {
	/// The action emitted when the user edits the input to `text`.
	#[must_use]
	pub fn change(&self, text: impl Into<String>) -> UiAction {
		UiAction::ChangeText(text.into())
	}
}

/// One selectable service in the filter row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceChip {
	pub service: Service,
	pub label: &'static str,
	pub selected: bool,
	pub on_select: UiAction,
}

/// Label followed by the service chips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterRow {
	pub label: String,
	pub chips: Vec<ServiceChip>,
}

impl FilterRow {
	#[must_use]
	pub fn selected(&self) -> Option<&ServiceChip> {
		self.chips.iter().find(|chip| chip.selected)
	}
}

/// A single result line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItem {
	pub id: SearchResultId,
	pub primary: String,
	pub secondary: Option<String>,
	pub service: Service,
	pub on_click: UiAction,
}

/// Scrollable list of results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsList {
	pub items: Vec<ResultItem>,
	/// Message drawn in place of an empty list.
	pub message: Option<String>,
}

/// Root of the layout tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchView {
	pub title: String,
	pub input_row: InputRow,
	pub filter_row: FilterRow,
	pub results: ResultsList,
}

impl SearchView {
	#[must_use]
	pub fn build(props: &SearchProps, labels: &crate::UiLabels) -> Self {
		let input_row = InputRow {
			text: props.search_text.clone(),
			placeholder: props.placeholder.clone(),
			dismiss: Control {
				symbol: "✕",
				on_click: UiAction::Close,
			},
			searching: props.search_pending,
		};

		let chips = Service::ALL
			.into_iter()
			.map(|service| ServiceChip {
				service,
				label: service.label(),
				selected: service == props.selected_service,
				on_select: UiAction::SelectService(service),
			})
			.collect();
		let filter_row = FilterRow {
			label: labels.filter_label.clone(),
			chips,
		};

		let items: Vec<ResultItem> = props
			.results
			.iter()
			.map(|entry| ResultItem {
				id: entry.id.clone(),
				primary: entry.username.clone(),
				secondary: secondary_text(entry),
				service: entry.service,
				on_click: UiAction::SelectResult(entry.id.clone()),
			})
			.collect();
		let message = if !items.is_empty() || props.search_pending {
			None
		} else if props.search_text.trim().is_empty() {
			Some(format!("Search {} users", props.selected_service.label()))
		} else {
			Some(labels.empty_label.clone())
		};

		Self {
			title: labels.title.clone(),
			input_row,
			filter_row,
			results: ResultsList { items, message },
		}
	}
}

fn secondary_text(entry: &psearch_core::ResultEntry) -> Option<String> {
	let linked = entry
		.keybase_username
		.as_ref()
		.filter(|_| entry.service != Service::Keybase)
		.map(|name| format!("keybase: {name}"));
	match (entry.full_name.as_deref(), linked) {
		(Some(full_name), Some(linked)) => Some(format!("{full_name} · {linked}")),
		(Some(full_name), None) => Some(full_name.to_string()),
		(None, linked) => linked,
	}
}

#[cfg(test)]
mod tests {
	use psearch_core::ResultEntry;

	use super::*;
	use crate::UiLabels;

	fn props() -> SearchProps {
		SearchProps {
			results: vec![
				ResultEntry {
					id: SearchResultId::new("ali@twitter"),
					username: "ali".into(),
					full_name: Some("Ali Hassan".into()),
					service: Service::Twitter,
					keybase_username: Some("ali_kb".into()),
				},
				ResultEntry::bare(SearchResultId::new("alison@twitter"), Service::Twitter),
			],
			search_text: "ali".into(),
			selected_service: Service::Twitter,
			placeholder: "Type someone".into(),
			search_pending: false,
		}
	}

	#[test]
	fn identical_inputs_build_identical_trees() {
		let labels = UiLabels::default();
		assert_eq!(
			SearchView::build(&props(), &labels),
			SearchView::build(&props(), &labels)
		);
	}

	#[test]
	fn filter_row_flags_the_selected_service() {
		let view = SearchView::build(&props(), &UiLabels::default());
		assert_eq!(view.filter_row.label, "Filter:");
		assert_eq!(view.filter_row.chips.len(), Service::ALL.len());
		let selected = view.filter_row.selected().unwrap();
		assert_eq!(selected.service, Service::Twitter);
		assert_eq!(
			selected.on_select,
			UiAction::SelectService(Service::Twitter)
		);
		assert_eq!(
			view.filter_row
				.chips
				.iter()
				.filter(|chip| chip.selected)
				.count(),
			1
		);
	}

	#[test]
	fn every_result_carries_its_click_action() {
		let view = SearchView::build(&props(), &UiLabels::default());
		let actions: Vec<_> = view
			.results
			.items
			.iter()
			.map(|item| item.on_click.clone())
			.collect();
		assert_eq!(
			actions,
			vec![
				UiAction::SelectResult(SearchResultId::new("ali@twitter")),
				UiAction::SelectResult(SearchResultId::new("alison@twitter")),
			]
		);
		assert_eq!(
			view.results.items[0].secondary.as_deref(),
			Some("Ali Hassan · keybase: ali_kb")
		);
		assert_eq!(view.results.items[1].secondary, None);
	}

	#[test]
	fn input_row_mirrors_props() {
		let view = SearchView::build(&props(), &UiLabels::default());
		assert_eq!(view.input_row.text, "ali");
		assert_eq!(view.input_row.placeholder, "Type someone");
		assert_eq!(view.input_row.dismiss.on_click, UiAction::Close);
		assert_eq!(
			view.input_row.change("alic"),
			UiAction::ChangeText("alic".into())
		);
	}

	#[test]
	fn empty_states_depend_on_query_and_pending_search() {
		let labels = UiLabels::default();
		let mut props = props();
		props.results.clear();

		let view = SearchView::build(&props, &labels);
		assert_eq!(view.results.message.as_deref(), Some("No results"));

		props.search_pending = true;
		assert_eq!(SearchView::build(&props, &labels).results.message, None);

		props.search_pending = false;
		props.search_text.clear();
		assert_eq!(
			SearchView::build(&props, &labels).results.message.as_deref(),
			Some("Search Twitter users")
		);
	}
}
