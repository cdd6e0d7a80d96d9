// src/common/config.rs
//! Runtime configuration for the `validate` binary.
//! Read from the environment, then overridden by command-line arguments.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Pretty-print the JSON report
    pub pretty: bool,
    /// Input file; `None` reads stdin
    pub input: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("VALIDATE_PRETTY").ok().as_deref(),
            env::var("VALIDATE_INPUT").ok().as_deref(),
        )
    }

    /// Builds the config from raw `VALIDATE_PRETTY` and `VALIDATE_INPUT` values
    pub fn from_values(pretty: Option<&str>, input: Option<&str>) -> Self {
        let pretty = pretty.unwrap_or("false").trim().to_lowercase() == "true";

        let input = input
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self { pretty, input }
    }

    /// Applies command-line overrides on top of this config.
    ///
    /// `--pretty` and `--compact` toggle formatting; the first argument that
    /// is not a flag is taken as the input path.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        for arg in args {
            match arg.as_str() {
                "--pretty" => self.pretty = true,
                "--compact" => self.pretty = false,
                "-" => self.input = None,
                flag if flag.starts_with("--") => {}
                path => {
                    self.input = Some(PathBuf::from(path));
                }
            }
        }

        self
    }
}

/// Override config from the process arguments
pub fn apply_cli_override(config: CliConfig) -> CliConfig {
    config.with_args(env::args().skip(1))
}
