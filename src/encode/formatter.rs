use std::io::{self, Write};

use serde_json::ser::Formatter;

/// Compact JSON with `", "` and `": "` separators.
///
/// With `ensure_ascii` every non-ASCII character in a string is written as a
/// lowercase `\uXXXX` escape, using a surrogate pair outside the BMP.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SpacedFormatter {
	ensure_ascii: bool,
}

impl SpacedFormatter {
	pub(crate) fn new(ensure_ascii: bool) -> Self {
		Self { ensure_ascii }
	}
}

impl Formatter for SpacedFormatter {
	fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		if first { Ok(()) } else { writer.write_all(b", ") }
	}

	fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		if first { Ok(()) } else { writer.write_all(b", ") }
	}

	fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		writer.write_all(b": ")
	}

	fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		if !self.ensure_ascii || fragment.is_ascii() {
			return writer.write_all(fragment.as_bytes());
		}

		let mut start = 0;
		for (idx, ch) in fragment.char_indices() {
			if ch.is_ascii() {
				continue;
			}
			writer.write_all(fragment[start..idx].as_bytes())?;
			let mut units = [0u16; 2];
			for unit in ch.encode_utf16(&mut units) {
				write!(writer, "\\u{unit:04x}")?;
			}
			start = idx + ch.len_utf8();
		}
		writer.write_all(fragment[start..].as_bytes())
	}
}
