//! TOML configuration file loading
//!
//! The file uses the long option names as keys:
//!
//! ```toml
//! data-file = "/srv/hms/records.json"
//! history-limit = 50
//! log-level = "info"
//! log-file = "none"
//! log-format = "ext"
//! color = false
//! ```
//!
//! Values only fill in options that were not given on the command line.

use crate::core::validation::{
    validate_history_limit, validate_log_format, validate_log_level, ValidationError,
};
use std::path::{Path, PathBuf};

use super::args::{disables_file_logging, Args};

/// `<config_dir>/Hms/hms.toml`, when the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Hms").join("hms.toml"))
}

/// Locate and parse the configuration file
///
/// An explicitly named file must exist; the default file is optional.
pub fn load_config_file(
    config_file: Option<&Path>,
) -> Result<Option<(PathBuf, toml::Table)>, ValidationError> {
    let path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(ValidationError::new(&format!(
                    "The specified configuration file does not exist: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        ValidationError::new(&format!(
            "Error reading configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    let table = toml::from_str::<toml::Table>(&contents).map_err(|e| {
        ValidationError::new(&format!(
            "Error parsing configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    log::debug!("Loaded configuration from {}", path.display());
    Ok(Some((path, table)))
}

impl Args {
    /// Fill options missing from the command line with values from `config`
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ValidationError> {
        if args.data_file.is_none() {
            if let Some(data_file) = Self::string_value(config, "data-file")? {
                args.data_file = Some(PathBuf::from(data_file));
            }
        }
        if args.history_limit.is_none() {
            if let Some(value) = config.get("history-limit") {
                let limit = value.as_integer().ok_or_else(|| {
                    ValidationError::new("Configuration key 'history-limit' must be an integer")
                })?;
                args.history_limit = Some(validate_history_limit(limit)?);
            }
        }
        if args.log_level.is_none() {
            if let Some(level) = Self::string_value(config, "log-level")? {
                args.log_level = Some(validate_log_level(level)?);
            }
        }
        if args.log_file.is_none() && !args.no_log_file {
            if let Some(log_file) = Self::string_value(config, "log-file")? {
                if !disables_file_logging(log_file) {
                    args.log_file = Some(PathBuf::from(log_file));
                }
            }
        }
        if args.log_format.is_none() {
            if let Some(format) = Self::string_value(config, "log-format")? {
                args.log_format = Some(validate_log_format(format)?);
            }
        }
        if let Some(value) = config.get("color") {
            let color = value.as_bool().ok_or_else(|| {
                ValidationError::new("Configuration key 'color' must be true or false")
            })?;
            args.config_color = Some(color);
        }

        for key in config.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                log::warn!("Ignoring unknown configuration key '{}'", key);
            }
        }
        Ok(())
    }

    fn string_value<'a>(
        config: &'a toml::Table,
        key: &str,
    ) -> Result<Option<&'a str>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or_else(|| {
                ValidationError::new(&format!("Configuration key '{}' must be a string", key))
            }),
        }
    }
}

const KNOWN_KEYS: [&str; 6] = [
    "data-file",
    "history-limit",
    "log-level",
    "log-file",
    "log-format",
    "color",
];
