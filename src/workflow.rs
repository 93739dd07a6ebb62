use anyhow::{Context, Result};
use modules_json::{ConvertOptions, Source, convert};

use crate::settings::ResolvedConfig;

/// Coordinates a single load → extract → render run.
pub(crate) struct ConversionWorkflow {
	source: Source,
	options: ConvertOptions,
}

impl ConversionWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig { source, options } = config;
		Self { source, options }
	}

	/// Return the envelope text for the configured source.
	pub(crate) fn run(self) -> Result<String> {
		convert(&self.source, &self.options)
			.with_context(|| format!("failed to convert modules from {}", self.source))
	}
}
