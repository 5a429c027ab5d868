//! Output format options.

use clap::ValueEnum;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables and detail views.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Compact JSON (single line).
    #[value(name = "json-compact")]
    JsonCompact,
    /// YAML format.
    #[value(alias = "yml")]
    Yaml,
    /// One identifier per line (for scripting).
    #[value(alias = "text")]
    Plain,
}

impl OutputFormat {
    /// Returns true for formats meant to be read by other programs.
    pub fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::JsonCompact | Self::Yaml)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}
