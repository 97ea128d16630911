//! Command implementations for the `gwalk` binary.

pub mod commands;

use clap::ValueEnum;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }
}
