//! Loading of the YAML configuration document.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::ModulesError;

/// Where the configuration document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
	/// A file, relative paths resolve against the working directory.
	Path(PathBuf),
	/// Standard input, spelled `-` on the command line.
	Stdin,
}

impl Source {
	/// Treat `-` as standard input and anything else as a file path.
	pub fn from_arg(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		if path.as_os_str() == "-" {
			Source::Stdin
		} else {
			Source::Path(path)
		}
	}
}

impl Default for Source {
	fn default() -> Self {
		Source::Path(PathBuf::from(crate::DEFAULT_INPUT))
	}
}

impl fmt::Display for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Source::Path(path) => write!(f, "{}", path.display()),
			Source::Stdin => f.write_str("<stdin>"),
		}
	}
}

/// Key whose mapping (or sequence of mappings) is folded into its parent.
const MERGE_KEY: &str = "<<";

/// A fully materialised YAML document with merge keys applied. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
	root: Value,
}

impl ConfigDocument {
	/// Read and parse the document named by `source`.
	pub fn load(source: &Source) -> Result<Self, ModulesError> {
		match source {
			Source::Path(path) => {
				let file = open(path)?;
				Self::from_reader(file, &source.to_string())
			}
			Source::Stdin => Self::from_reader(io::stdin().lock(), &source.to_string()),
		}
	}

	/// Parse a document from any reader. `origin` is only used in diagnostics.
	pub fn from_reader(mut reader: impl Read, origin: &str) -> Result<Self, ModulesError> {
		let mut content = String::new();
		reader
			.read_to_string(&mut content)
			.map_err(|source| ModulesError::Read {
				origin: origin.to_string(),
				source,
			})?;
		debug!(origin, bytes = content.len(), "read configuration document");
		Self::parse(&content, origin)
	}

	/// Parse a document held in memory.
	pub fn parse(content: &str, origin: &str) -> Result<Self, ModulesError> {
		// An empty stream is a null document rather than a syntax error.
		if content.trim().is_empty() {
			return Ok(Self { root: Value::Null });
		}

		let parse_error = |source| ModulesError::Parse {
			origin: origin.to_string(),
			source,
		};
		let mut root: Value = serde_yaml::from_str(content).map_err(parse_error)?;
		apply_merge_keys(&mut root).map_err(parse_error)?;
		Ok(Self { root })
	}

	/// The top-level value of the document.
	pub fn root(&self) -> &Value {
		&self.root
	}
}

fn open(path: &Path) -> Result<File, ModulesError> {
	File::open(path).map_err(|source| match source.kind() {
		io::ErrorKind::NotFound => ModulesError::NotFound {
			path: path.to_path_buf(),
		},
		_ => ModulesError::Read {
			origin: path.display().to_string(),
			source,
		},
	})
}

/// Fold `<<` entries into their mappings, depth first.
///
/// Merged keys come first in source order, and the mapping's own entries
/// override them in place. With a sequence of sources, earlier ones win.
fn apply_merge_keys(value: &mut Value) -> Result<(), serde_yaml::Error> {
	match value {
		Value::Mapping(mapping) => {
			for item in mapping.values_mut() {
				apply_merge_keys(item)?;
			}
			let Some(merge) = mapping.shift_remove(MERGE_KEY) else {
				return Ok(());
			};
			let sources = match merge {
				Value::Mapping(source) => vec![source],
				Value::Sequence(items) => items
					.into_iter()
					.rev()
					.map(|item| match item {
						Value::Mapping(source) => Ok(source),
						other => Err(serde_yaml::Error::custom(format!(
							"expected a mapping in merge sequence, found a {}",
							kind_of(&other)
						))),
					})
					.collect::<Result<Vec<_>, _>>()?,
				other => {
					return Err(serde_yaml::Error::custom(format!(
						"expected a mapping or sequence of mappings for merge, found a {}",
						kind_of(&other)
					)));
				}
			};

			let mut merged = Mapping::new();
			for (key, item) in sources.into_iter().flatten() {
				merged.insert(key, item);
			}
			for (key, item) in std::mem::take(mapping) {
				merged.insert(key, item);
			}
			*mapping = merged;
			Ok(())
		}
		Value::Sequence(items) => items.iter_mut().try_for_each(apply_merge_keys),
		Value::Tagged(tagged) => apply_merge_keys(&mut tagged.value),
		_ => Ok(()),
	}
}

/// Short name for the kind of a YAML value, used in diagnostics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Sequence(_) => "sequence",
		Value::Mapping(_) => "mapping",
		Value::Tagged(_) => "tagged value",
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn dash_selects_standard_input() {
		assert_eq!(Source::from_arg("-"), Source::Stdin);
		assert_eq!(
			Source::from_arg("other.yaml"),
			Source::Path(PathBuf::from("other.yaml"))
		);
	}

	#[test]
	fn default_source_is_modules_yaml() {
		assert_eq!(Source::default().to_string(), "modules.yaml");
	}

	#[test]
	fn parses_from_in_memory_reader() {
		let input = Cursor::new("modules:\n  - name: auth\n");
		let doc = ConfigDocument::from_reader(input, "memory").expect("parses");
		let modules = doc.root().get("modules").expect("modules key");
		assert!(modules.is_sequence());
	}

	#[test]
	fn mapping_order_is_preserved() {
		let doc = ConfigDocument::parse("zeta: 1\nalpha: 2\nmid: 3\n", "memory").unwrap();
		let keys: Vec<_> = doc
			.root()
			.as_mapping()
			.unwrap()
			.keys()
			.filter_map(Value::as_str)
			.collect();
		assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
	}

	#[test]
	fn empty_input_is_a_null_document() {
		let doc = ConfigDocument::parse("  \n", "memory").unwrap();
		assert_eq!(doc.root(), &Value::Null);
	}

	#[test]
	fn malformed_input_is_a_parse_error() {
		let err = ConfigDocument::parse("modules: [unterminated\n", "memory").unwrap_err();
		assert!(matches!(err, ModulesError::Parse { .. }), "{err:?}");
	}

	#[test]
	fn multiple_documents_are_rejected() {
		let err = ConfigDocument::parse("a: 1\n---\nb: 2\n", "memory").unwrap_err();
		assert!(matches!(err, ModulesError::Parse { .. }), "{err:?}");
	}

	#[test]
	fn invalid_utf8_is_a_read_error() {
		let input = Cursor::new(vec![0xff, 0xfe]);
		let err = ConfigDocument::from_reader(input, "memory").unwrap_err();
		assert!(matches!(err, ModulesError::Read { .. }), "{err:?}");
	}

	#[test]
	fn merge_keys_are_folded_into_their_mapping() {
		let yaml = "\
defaults: &defaults {tier: gold, region: eu}
extra: &extra {region: us, owner: ops}
modules:
  - name: auth
    <<: [*defaults, *extra]
    tier: silver
";
		let doc = ConfigDocument::parse(yaml, "memory").unwrap();
		let module = &doc.root()["modules"][0];
		let entries: Vec<_> = module
			.as_mapping()
			.unwrap()
			.iter()
			.map(|(key, value)| (key.as_str().unwrap(), value.as_str().unwrap()))
			.collect();
		assert_eq!(
			entries,
			vec![
				("region", "eu"),
				("owner", "ops"),
				("tier", "silver"),
				("name", "auth"),
			]
		);
	}

	#[test]
	fn scalar_merge_source_is_a_parse_error() {
		let err = ConfigDocument::parse("modules:\n  - <<: 3\n", "memory").unwrap_err();
		assert!(matches!(err, ModulesError::Parse { .. }), "{err:?}");
	}

	#[test]
	fn duplicate_keys_are_a_parse_error() {
		let err = ConfigDocument::parse("modules: []\nmodules: [a]\n", "memory").unwrap_err();
		assert!(matches!(err, ModulesError::Parse { .. }), "{err:?}");
	}

	#[test]
	fn integers_beyond_u64_are_a_parse_error() {
		let err =
			ConfigDocument::parse("modules: [100000000000000000000000]\n", "memory").unwrap_err();
		assert!(matches!(err, ModulesError::Parse { .. }), "{err:?}");
	}

	#[test]
	fn yaml_1_1_scalars_stay_strings() {
		let doc = ConfigDocument::parse("modules: [yes, on, 010]\n", "memory").unwrap();
		let modules = &doc.root()["modules"];
		assert_eq!(modules[0].as_str(), Some("yes"));
		assert_eq!(modules[1].as_str(), Some("on"));
		assert_eq!(modules[2].as_str(), Some("010"));
	}

	#[test]
	fn missing_file_is_not_found() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("modules.yaml");
		let err = ConfigDocument::load(&Source::Path(path.clone())).unwrap_err();
		match err {
			ModulesError::NotFound { path: reported } => assert_eq!(reported, path),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn directory_is_a_read_error() {
		let dir = tempdir().unwrap();
		let err = ConfigDocument::load(&Source::Path(dir.path().to_path_buf())).unwrap_err();
		assert!(matches!(err, ModulesError::Read { .. }), "{err:?}");
	}

	#[test]
	fn loads_document_from_disk() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("modules.yaml");
		std::fs::write(&path, "modules: []\n").unwrap();
		let doc = ConfigDocument::load(&Source::Path(path)).unwrap();
		assert!(doc.root().get("modules").is_some());
	}
}
