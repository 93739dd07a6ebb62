//! Extraction of the module list from a loaded document.

use serde_yaml::Value;
use tracing::debug;

use crate::document::{ConfigDocument, kind_of};
use crate::error::ModulesError;

/// How strictly the value under the module key is checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ShapePolicy {
	/// Pass whatever value is present through uninterpreted.
	#[default]
	Permissive,
	/// Reject anything that is not a sequence.
	RequireSequence,
}

/// The value stored under the module key, borrowed from its document.
#[derive(Debug, Clone, Copy)]
pub struct ModuleList<'a> {
	value: &'a Value,
}

impl<'a> ModuleList<'a> {
	pub fn new(value: &'a Value) -> Self {
		Self { value }
	}

	pub fn value(&self) -> &'a Value {
		self.value
	}

	/// Number of descriptors, when the value is a sequence.
	pub fn len(&self) -> Option<usize> {
		self.value.as_sequence().map(Vec::len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == Some(0)
	}
}

/// Look up `key` in the top-level mapping of `doc`.
///
/// The match is exact and case-sensitive. A root that is not a mapping is
/// reported the same way as a mapping without the key.
pub fn extract<'a>(
	doc: &'a ConfigDocument,
	key: &str,
	policy: ShapePolicy,
) -> Result<ModuleList<'a>, ModulesError> {
	let root = doc.root();
	let value = root
		.as_mapping()
		.and_then(|mapping| mapping.get(key))
		.ok_or_else(|| ModulesError::MissingKey {
			key: key.to_string(),
			found: kind_of(root),
		})?;

	if policy == ShapePolicy::RequireSequence && !value.is_sequence() {
		return Err(ModulesError::NotASequence {
			key: key.to_string(),
			found: kind_of(value),
		});
	}

	let modules = ModuleList::new(value);
	match modules.len() {
		Some(count) => debug!(key, count, "extracted module list"),
		None => debug!(key, kind = kind_of(value), "extracted non-sequence module value"),
	}
	Ok(modules)
}
