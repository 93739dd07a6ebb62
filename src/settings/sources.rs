use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use directories::ProjectDirs;
use modules_json::{DEFAULT_FIELD, DEFAULT_INPUT, DEFAULT_KEY};
use tracing::debug;

use crate::cli::CliArgs;

/// Environment variable overriding the directory holding the user `config.toml`.
const CONFIG_DIR_ENV: &str = "MODULES_JSON_CONFIG_DIR";

type Builder = ConfigBuilder<DefaultState>;

/// Layer every settings source, lowest precedence first: built-in defaults,
/// user and project files, explicit `--config` files, `MODULES_JSON__*`
/// variables, then command-line flags.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = with_defaults(Config::builder())?;

    if !cli.no_config {
        for path in default_config_files() {
            debug!(path = %path.display(), "consulting optional configuration file");
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix("modules_json")
            .separator("__")
            .try_parsing(true),
    );

    with_cli_overrides(builder, cli)?
        .build()
        .map_err(|err| match err {
            ConfigError::Frozen => anyhow!("configuration builder is frozen"),
            other => other.into(),
        })
}

/// Defaults that reproduce a bare `modules.yaml` → `modules_json` run.
fn with_defaults(builder: Builder) -> Result<Builder, ConfigError> {
    builder
        .set_default("input.path", DEFAULT_INPUT)?
        .set_default("input.key", DEFAULT_KEY)?
        .set_default("input.require_sequence", false)?
        .set_default("output.field", DEFAULT_FIELD)?
        .set_default("output.ensure_ascii", true)
}

/// Flags given on the command line win over every other source.
fn with_cli_overrides(builder: Builder, cli: &CliArgs) -> Result<Builder, ConfigError> {
    let input = cli
        .input
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned());

    builder
        .set_override_option("input.path", input)?
        .set_override_option("input.key", cli.key.clone())?
        .set_override_option("input.require_sequence", cli.strict.then_some(true))?
        .set_override_option("output.field", cli.field.clone())?
        .set_override_option("output.ensure_ascii", cli.ensure_ascii)
}

/// The user-wide settings file, honouring [`CONFIG_DIR_ENV`].
fn user_config_file() -> Option<PathBuf> {
    let dir = match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => ProjectDirs::from("io", "modules-json", "modules-json")?
            .config_local_dir()
            .to_path_buf(),
    };
    Some(dir.join("config.toml"))
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files: Vec<_> = user_config_file().into_iter().collect();

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".modules-json.toml"));
        files.push(current_dir.join("modules-json.toml"));
    }

    files
}
