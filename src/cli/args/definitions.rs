use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `psearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "psearch",
	version,
	long_version = long_version(),
	about = "Search people across Keybase and linked services",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long,
		value_name = "FILE",
		help = "JSON user directory to search (default: bundled sample)"
	)]
	pub(crate) directory: Option<PathBuf>,
	#[arg(
		short = 's',
		long,
		value_name = "SERVICE",
		help = "Service selected when the panel opens (default: keybase)"
	)]
	pub(crate) service: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "MILLIS",
		help = "Quiet period before a typed query is searched (default: 1000)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 'p',
		long,
		value_name = "TEXT",
		help = "Placeholder shown in the empty input (default: \"Type someone\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title on the panel border (default: \"Search people\")"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "filter-label",
		value_name = "TEXT",
		help = "Label in front of the service chips (default: \"Filter:\")"
	)]
	pub(crate) filter_label: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter used when RUST_LOG is unset (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Where log events are written (default: <data dir>/psearch.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "list-services",
		help = "List searchable services and exit (default: disabled)"
	)]
	pub(crate) list_services: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
