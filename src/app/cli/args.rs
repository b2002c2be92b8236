//! Command line arguments
//!
//! Anything not given on the command line may come from the TOML configuration file
//! (see [`super::config`]). Trailing words are run once as an HMS command instead of
//! starting the interactive prompt.

use crate::core::styles::palette_to_clap;
use crate::core::version::long_version;
use crate::core::validation::{validate_log_format, validate_log_level, ValidationError};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// "none" and "-" mean no log file, on the command line and in the configuration file
pub fn disables_file_logging(value: &str) -> bool {
    value.eq_ignore_ascii_case("none") || value == "-"
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "hms")]
#[command(about = "Hospital management system: patient check-in and appointment tracking")]
#[command(version)]
#[command(after_help = "Run without COMMAND for an interactive prompt; type 'help' there for the command list")]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Record file path
    #[arg(short = 'd', long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Maximum number of undo steps kept (unbounded when not set)
    #[arg(long = "history-limit", value_name = "COUNT")]
    pub history_limit: Option<usize>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Force colored output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Colour preference read from the configuration file
    #[arg(skip)]
    pub config_color: Option<bool>,

    /// File logging was switched off with `--log-file none`
    #[arg(skip)]
    pub no_log_file: bool,

    /// HMS command to run once, e.g. `list` or `find alice`
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from an explicit argument list (first element is the program name)
    pub fn parse_from_args(args: &[String], use_color: bool) -> Result<Self, clap::Error> {
        let matches = Self::command()
            .long_version(long_version())
            .styles(palette_to_clap(use_color))
            .try_get_matches_from(args)?;
        let mut args = Self::from_arg_matches(&matches)?;
        if args
            .log_file
            .as_deref()
            .and_then(|p| p.to_str())
            .is_some_and(disables_file_logging)
        {
            args.log_file = None;
            args.no_log_file = true;
        }
        Ok(args)
    }

    /// Colour decision: flags beat the config file, which beats terminal detection
    pub fn use_color(&self, is_terminal: bool) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            self.config_color.unwrap_or(is_terminal)
        }
    }

    /// Trailing command words joined back into one command line
    pub fn one_shot_command(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }

    /// Check values after the configuration file has been merged
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_limit == Some(0) {
            return Err(ValidationError::new(
                "Option --history-limit must be greater than 0",
            ));
        }
        if let Some(level) = &self.log_level {
            validate_log_level(level)?;
        }
        if let Some(format) = &self.log_format {
            validate_log_format(format)?;
        }
        if let Some(path) = &self.data_file {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::new("Option --data-file must not be empty"));
            }
            if path.is_dir() {
                return Err(ValidationError::new(&format!(
                    "Data file '{}' is a directory",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
