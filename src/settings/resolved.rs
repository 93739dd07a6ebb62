use modules_json::{ConvertOptions, ShapePolicy, Source};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub source: Source,
    pub options: ConvertOptions,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    ///
    /// Written to stderr so standard output keeps only the envelope line.
    pub fn print_summary(&self) {
        eprintln!("Effective configuration:");
        eprintln!("  Input: {}", self.source);
        eprintln!("  Key: {}", self.options.key);
        eprintln!(
            "  Require sequence: {}",
            bool_to_word(self.options.shape == ShapePolicy::RequireSequence)
        );
        eprintln!("  Envelope field: {}", self.options.render.field);
        eprintln!(
            "  Ensure ASCII: {}",
            bool_to_word(self.options.render.ensure_ascii)
        );
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
