use anyhow::Result;
use psearch_tui::SearchOutcome;
use serde_json::json;

/// Text printed for `outcome` in plain mode.
pub(crate) fn format_plain(outcome: &SearchOutcome) -> String {
	match (&outcome.selection, outcome.accepted) {
		(Some(entry), true) => format!("{} ({})", entry.username, entry.service),
		_ => format!("Search closed (query: '{}')", outcome.query),
	}
}

pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(entry) => json!({
			"id": entry.id,
			"username": entry.username,
			"full_name": entry.full_name,
			"service": entry.service,
			"keybase_username": entry.keybase_username,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use psearch_core::{ResultEntry, SearchResultId, Service};
	use serde_json::Value;

	use super::*;

	fn chosen() -> SearchOutcome {
		SearchOutcome {
			accepted: true,
			query: "ali".into(),
			selection: Some(ResultEntry {
				id: SearchResultId::new("alison@twitter"),
				username: "alison".into(),
				full_name: None,
				service: Service::Twitter,
				keybase_username: Some("alice".into()),
			}),
		}
	}

	#[test]
	fn plain_output_names_user_and_service() {
		assert_eq!(format_plain(&chosen()), "alison (Twitter)");
	}

	#[test]
	fn plain_output_reports_dismissal() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "bo".into(),
			selection: None,
		};
		assert_eq!(format_plain(&outcome), "Search closed (query: 'bo')");
	}

	#[test]
	fn json_format_includes_selection() {
		let json = format_outcome_json(&chosen()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "ali");
		assert_eq!(value["selection"]["id"], "alison@twitter");
		assert_eq!(value["selection"]["service"], "twitter");
		assert_eq!(value["selection"]["full_name"], Value::Null);
		assert_eq!(value["selection"]["keybase_username"], "alice");
	}

	#[test]
	fn json_selection_is_null_when_dismissed() {
		let outcome = SearchOutcome {
			accepted: false,
			query: String::new(),
			selection: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["selection"], Value::Null);
		assert_eq!(value["accepted"], false);
	}
}
