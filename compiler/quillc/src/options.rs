//! Command-line options shared by every command.

use quill_grapheme::{ClusterStrategy, CodePoints, ExtendedGraphemes, LegacyGraphemes};

/// Cluster strategy picked with `--strategy=`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum StrategyChoice {
    #[default]
    Extended,
    Legacy,
    CodePoint,
}

impl StrategyChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "extended" => Some(StrategyChoice::Extended),
            "legacy" => Some(StrategyChoice::Legacy),
            "codepoint" | "code-point" => Some(StrategyChoice::CodePoint),
            _ => None,
        }
    }

    /// Build the strategy. `max_len` is ignored for code points.
    pub fn build(self, max_len: usize) -> Box<dyn ClusterStrategy + Send + Sync> {
        match self {
            StrategyChoice::Extended => Box::new(ExtendedGraphemes::with_max_len(max_len)),
            StrategyChoice::Legacy => Box::new(LegacyGraphemes::with_max_len(max_len)),
            StrategyChoice::CodePoint => Box::new(CodePoints),
        }
    }
}

/// Options accepted after the command name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CliOptions {
    /// Emit reports as JSON instead of text.
    pub json: bool,
    /// Print symbol table statistics to stderr when done.
    pub stats: bool,
    /// Raise the default log level to `debug`.
    pub verbose: bool,
    /// Process files on the rayon pool.
    pub parallel: bool,
    pub strategy: StrategyChoice,
    pub max_cluster: usize,
    /// Alignment column for `encode`.
    pub column: u32,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            json: false,
            stats: false,
            verbose: false,
            parallel: true,
            strategy: StrategyChoice::default(),
            max_cluster: ExtendedGraphemes::DEFAULT_MAX_LEN,
            column: 0,
        }
    }
}

/// A malformed command-line option.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    Unknown(String),
    #[error("invalid value '{value}' for {option}: expected {expected}")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Split `args` into options and positional arguments.
///
/// # Errors
///
/// Unknown flags and unparsable values.
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), OptionsError> {
    let mut options = CliOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => options.json = true,
            "--stats" => options.stats = true,
            "-v" | "--verbose" => options.verbose = true,
            "--no-parallel" => options.parallel = false,
            _ => {
                if let Some(value) = arg.strip_prefix("--strategy=") {
                    options.strategy =
                        StrategyChoice::parse(value).ok_or_else(|| OptionsError::InvalidValue {
                            option: "--strategy",
                            value: value.to_owned(),
                            expected: "extended, legacy or codepoint",
                        })?;
                } else if let Some(value) = arg.strip_prefix("--max-cluster=") {
                    options.max_cluster = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or_else(|| OptionsError::InvalidValue {
                            option: "--max-cluster",
                            value: value.to_owned(),
                            expected: "a positive integer",
                        })?;
                } else if let Some(value) = arg.strip_prefix("--column=") {
                    options.column =
                        value.parse().map_err(|_| OptionsError::InvalidValue {
                            option: "--column",
                            value: value.to_owned(),
                            expected: "a non-negative integer",
                        })?;
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(OptionsError::Unknown(arg.clone()));
                } else {
                    positional.push(arg.clone());
                }
            }
        }
    }

    Ok((options, positional))
}
