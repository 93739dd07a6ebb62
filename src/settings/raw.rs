use std::path::PathBuf;

use anyhow::{Result, ensure};
use serde::Deserialize;

use modules_json::{ConvertOptions, RenderOptions, ShapePolicy, Source};

use super::resolved::ResolvedConfig;

/// Mirror of the merged configuration before validation. Every field has a
/// registered default, so deserialization only fails on a mistyped value.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawConfig {
    input: InputSection,
    output: OutputSection,
}

/// Where the document is read from and what is taken out of it.
#[derive(Debug, Clone, Deserialize)]
struct InputSection {
    path: PathBuf,
    key: String,
    require_sequence: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputSection {
    field: String,
    ensure_ascii: bool,
}

impl RawConfig {
    /// Validate the merged values.
    ///
    /// Names are checked for blankness but kept verbatim: the key lookup is exact.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let InputSection {
            path,
            key,
            require_sequence,
        } = self.input;
        ensure!(!key.trim().is_empty(), "input key must not be empty");
        ensure!(
            !self.output.field.trim().is_empty(),
            "output field must not be empty"
        );

        let shape = if require_sequence {
            ShapePolicy::RequireSequence
        } else {
            ShapePolicy::Permissive
        };

        Ok(ResolvedConfig {
            source: Source::from_arg(path),
            options: ConvertOptions {
                key,
                shape,
                render: RenderOptions {
                    field: self.output.field,
                    ensure_ascii: self.output.ensure_ascii,
                },
            },
        })
    }
}
