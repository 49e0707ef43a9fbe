use clap::ValueEnum;
use std::fmt;

/// Knobs for a single grouping run. Passed explicitly; there is no global
/// configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupConfig {
    /// Enumerate pairs on the rayon thread pool. Output is identical to the
    /// sequential scan, including the order of pairs inside each bucket.
    pub parallel: bool,
}

impl GroupConfig {
    pub fn sequential() -> Self {
        GroupConfig { parallel: false }
    }

    pub fn parallel() -> Self {
        GroupConfig { parallel: true }
    }
}

/// How results are rendered by the command line tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
