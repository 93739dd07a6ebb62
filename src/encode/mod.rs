//! Double encoding of the module list.
//!
//! The list is first written as JSON text, and that text becomes the string
//! value of the only field of the output envelope, which is written as JSON in
//! turn. The envelope therefore never nests the list as a native array.

mod formatter;
mod value;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::trace;

use crate::error::ModulesError;
use crate::modules::ModuleList;
use formatter::SpacedFormatter;

/// Controls the shape and escaping of the rendered envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
	/// Name of the single envelope field.
	pub field: String,
	/// Escape every non-ASCII character as `\uXXXX`.
	pub ensure_ascii: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			field: crate::DEFAULT_FIELD.to_string(),
			ensure_ascii: true,
		}
	}
}

/// A single-key mapping whose value is already-encoded JSON text.
struct Envelope<'a> {
	field: &'a str,
	payload: &'a str,
}

impl Serialize for Envelope<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(1))?;
		map.serialize_entry(self.field, self.payload)?;
		map.end()
	}
}

/// Render `modules` as the envelope text, without a trailing newline.
pub fn render(modules: &ModuleList<'_>, options: &RenderOptions) -> Result<String, ModulesError> {
	let json = value::to_json(modules.value(), "modules")?;
	let payload = write_json(&json, options.ensure_ascii)?;
	trace!(bytes = payload.len(), "encoded module list");

	let envelope = Envelope {
		field: &options.field,
		payload: &payload,
	};
	write_json(&envelope, options.ensure_ascii)
}

fn write_json<T: Serialize + ?Sized>(value: &T, ensure_ascii: bool) -> Result<String, ModulesError> {
	let mut out = Vec::new();
	let mut serializer =
		serde_json::Serializer::with_formatter(&mut out, SpacedFormatter::new(ensure_ascii));
	value
		.serialize(&mut serializer)
		.map_err(|err| ModulesError::encode("modules", err.to_string()))?;
	String::from_utf8(out).map_err(|err| ModulesError::encode("modules", err.to_string()))
}

#[cfg(test)]
mod tests;
