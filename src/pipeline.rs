use tracing::info;

use crate::document::{ConfigDocument, Source};
use crate::encode::{RenderOptions, render};
use crate::error::ModulesError;
use crate::modules::{ShapePolicy, extract};

/// Options for a full load → extract → render run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
	/// Top-level key holding the module list.
	pub key: String,
	pub shape: ShapePolicy,
	pub render: RenderOptions,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self {
			key: crate::DEFAULT_KEY.to_string(),
			shape: ShapePolicy::default(),
			render: RenderOptions::default(),
		}
	}
}

/// Load the document at `source` and return the rendered envelope text.
pub fn convert(source: &Source, options: &ConvertOptions) -> Result<String, ModulesError> {
	let doc = ConfigDocument::load(source)?;
	let modules = extract(&doc, &options.key, options.shape)?;
	let rendered = render(&modules, &options.render)?;
	info!(%source, field = %options.render.field, "rendered module envelope");
	Ok(rendered)
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn converts_file_with_default_options() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("modules.yaml");
		std::fs::write(&path, "modules:\n  - name: auth\n").unwrap();

		let out = convert(&Source::Path(path), &ConvertOptions::default()).unwrap();
		assert_eq!(out, r#"{"modules_json": "[{\"name\": \"auth\"}]"}"#);
	}

	#[test]
	fn custom_key_selects_another_entry() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("plugins.yaml");
		std::fs::write(&path, "modules: [a]\nplugins: [b]\n").unwrap();

		let options = ConvertOptions {
			key: "plugins".into(),
			..ConvertOptions::default()
		};
		let out = convert(&Source::Path(path), &options).unwrap();
		assert_eq!(out, r#"{"modules_json": "[\"b\"]"}"#);
	}

	#[test]
	fn missing_file_propagates_not_found() {
		let dir = tempdir().unwrap();
		let err = convert(
			&Source::Path(dir.path().join("absent.yaml")),
			&ConvertOptions::default(),
		)
		.unwrap_err();
		assert!(matches!(err, ModulesError::NotFound { .. }));
	}
}
