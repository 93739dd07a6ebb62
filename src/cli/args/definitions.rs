use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

/// Command-line arguments accepted by the `modules-json` binary.
#[derive(Parser, Debug)]
#[command(
    name = "modules-json",
    version,
    about = "Print the module list of a YAML file as a JSON-encoded string",
    color = ColorChoice::Auto
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Read the document from FILE, or '-' for standard input (default: modules.yaml)"
    )]
    pub(crate) input: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "KEY",
        help = "Top-level key holding the module list (default: modules)"
    )]
    pub(crate) key: Option<String>,
    #[arg(
        short,
        long,
        value_name = "NAME",
        help = "Name of the output envelope field (default: modules_json)"
    )]
    pub(crate) field: Option<String>,
    #[arg(
        short,
        long,
        help = "Fail unless the module value is a sequence (default: disabled)"
    )]
    pub(crate) strict: bool,
    #[arg(
        long = "ensure-ascii",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Escape non-ASCII characters as \\uXXXX (default: enabled)"
    )]
    pub(crate) ensure_ascii: Option<bool>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "MODULES_JSON_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration to stderr before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity on stderr (repeatable)"
    )]
    pub(crate) verbose: u8,
}
