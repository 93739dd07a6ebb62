use std::io::{self, Write};

use anyhow::{Context, Result};

/// Write the envelope as the single line of standard output.
pub(crate) fn print_envelope(envelope: &str) -> Result<()> {
	let stdout = io::stdout();
	let mut handle = stdout.lock();
	write_line(&mut handle, envelope).context("failed to write envelope to standard output")
}

fn write_line(writer: &mut impl Write, envelope: &str) -> io::Result<()> {
	writeln!(writer, "{envelope}")?;
	writer.flush()
}
