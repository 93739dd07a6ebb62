mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{parse_cli, print_envelope};
use workflow::ConversionWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	modules_json::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let envelope = ConversionWorkflow::from_config(resolved).run()?;
	print_envelope(&envelope)
}
