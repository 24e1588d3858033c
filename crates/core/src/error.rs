use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Returned when a service name does not match any supported service.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown service '{name}' (expected one of: {expected})")]
pub struct ServiceParseError {
	/// The rejected input.
	pub name: String,
	/// Comma separated list of accepted identifiers.
	pub expected: String,
}

/// Errors raised while loading a [`UserDirectory`](crate::UserDirectory).
#[derive(Debug, Error)]
pub enum DirectoryError {
	/// The directory file could not be read.
	#[error("failed to read user directory {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The directory contents are not a valid JSON list of users.
	#[error("failed to parse user directory {origin}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
}
