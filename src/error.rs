use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, extracting or rendering the module list.
#[derive(Debug, Error)]
pub enum ModulesError {
	/// The configuration source does not exist at the expected location.
	#[error("configuration file {} does not exist", .path.display())]
	NotFound { path: PathBuf },

	/// The source exists but could not be read to completion.
	#[error("failed to read configuration from {origin}")]
	Read {
		origin: String,
		#[source]
		source: io::Error,
	},

	/// The source is not a well-formed YAML document.
	#[error("failed to parse configuration from {origin}: {source}")]
	Parse {
		origin: String,
		#[source]
		source: serde_yaml::Error,
	},

	/// The root is not a mapping, or the mapping has no entry for `key`.
	#[error("configuration has no '{key}' key (top-level value is a {found})")]
	MissingKey { key: String, found: &'static str },

	/// Shape validation was requested and the value under `key` is not a sequence.
	#[error("value under '{key}' must be a sequence, found a {found}")]
	NotASequence { key: String, found: &'static str },

	/// A value cannot be represented in JSON.
	#[error("cannot encode {path} as JSON: {reason}")]
	Encode { path: String, reason: String },
}

impl ModulesError {
	pub(crate) fn encode(path: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::Encode {
			path: path.into(),
			reason: reason.into(),
		}
	}
}
