use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_leave_overrides_unset() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["psearch"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.no_config);
	assert_eq!(parsed.service, None);
	assert_eq!(parsed.debounce_ms, None);
}

#[test]
fn flags_are_parsed() {
	let parsed = CliArgs::parse_from([
		"psearch",
		"--no-config",
		"--config",
		"a.toml",
		"-c",
		"b.toml",
		"--service",
		"twitter",
		"--debounce-ms",
		"250",
		"-q",
		"ali",
		"--output",
		"json",
	]);

	assert!(parsed.no_config);
	assert_eq!(
		parsed.config,
		vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
	);
	assert_eq!(parsed.service.as_deref(), Some("twitter"));
	assert_eq!(parsed.debounce_ms, Some(250));
	assert_eq!(parsed.initial_query.as_deref(), Some("ali"));
	assert_eq!(parsed.output, OutputFormat::Json);
}
