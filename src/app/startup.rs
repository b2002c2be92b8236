//! Application startup
//!
//! Stages: parse the command line, merge the configuration file, start logging,
//! check static tables, load the record file, then either run the trailing command
//! once or hand over to the interactive prompt.

use crate::app::cli::args::Args;
use crate::app::cli::config::load_config_file;
use crate::app::repl;
use crate::core::error_handling::{log_error_with_context, ContextualError};
use crate::core::logging::init_logging;
use crate::core::validation::ValidationError;
use crate::core::version::long_version;
use crate::logic::LogicManager;
use crate::model::appointment::AppointmentType;
use crate::model::record_book::RecordBook;
use crate::model::Model;
use crate::storage::json::default_data_path;
use crate::storage::{JsonRecordBookStorage, RecordBookStorage};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ValidationError),

    #[error("Could not start logging: {0}")]
    Logging(String),

    #[error("Appointment type table is inconsistent: {0}")]
    AppointmentTypes(String),

    #[error("No data file given and no platform data directory to default to")]
    NoDataFile,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ContextualError for StartupError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, StartupError::Config(_) | StartupError::NoDataFile)
    }

    fn user_message(&self) -> Option<String> {
        match self {
            StartupError::Config(e) => e.user_message(),
            StartupError::NoDataFile => Some(self.to_string()),
            _ => None,
        }
    }
}

/// Run the application and report how it ended
pub fn startup() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let cli_color = !raw_args.iter().any(|a| a == "--no-color") && std::io::stdout().is_terminal();
    let args = match Args::parse_from_args(&raw_args, cli_color) {
        Ok(args) => args,
        // prints help/version or the usage error and exits
        Err(e) => e.exit(),
    };

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log_error_with_context(&e, "Application startup");
            if let Some(message) = e.user_message() {
                eprintln!("Error: {}", message);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Everything after argument parsing; `Ok(false)` when a one-shot command failed
pub fn run(mut args: Args) -> Result<bool, StartupError> {
    if let Some((_, config)) = load_config_file(args.config_file.as_deref())? {
        Args::apply_toml_values(&mut args, &config)?;
    }
    args.validate()?;

    let use_color = args.use_color(std::io::stdout().is_terminal());
    let log_file = args.log_file.as_ref().map(|p| p.to_string_lossy().to_string());
    init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color && log_file.is_none(),
    )
    .map_err(|e| StartupError::Logging(e.to_string()))?;
    log::info!("hms {} starting", long_version());
    log::debug!("Final arguments: {:?}", args);

    AppointmentType::verify_abbreviations().map_err(StartupError::AppointmentTypes)?;

    let data_file = resolve_data_file(&args)?;
    let storage = JsonRecordBookStorage::new(data_file);
    let book = load_record_book(&storage);
    let model = Model::new(book, args.history_limit);
    let mut logic = LogicManager::new(model, Box::new(storage));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let succeeded = match args.one_shot_command() {
        Some(command) => repl::run_once(&mut logic, &command, &mut out, use_color)?,
        None => {
            let stdin = std::io::stdin();
            repl::run(&mut logic, stdin.lock(), &mut out, use_color)?;
            true
        }
    };
    log::info!("hms stopping");
    Ok(succeeded)
}

fn resolve_data_file(args: &Args) -> Result<PathBuf, StartupError> {
    args.data_file
        .clone()
        .or_else(default_data_path)
        .ok_or(StartupError::NoDataFile)
}

/// Load the saved records, starting empty when there are none or they cannot be read
fn load_record_book(storage: &dyn RecordBookStorage) -> RecordBook {
    match storage.read() {
        Ok(Some(book)) => book,
        Ok(None) => {
            log::info!(
                "Data file {} not found, starting with an empty record book",
                storage.path().display()
            );
            RecordBook::new()
        }
        Err(e) => {
            log::warn!("{}", e);
            log::warn!("Starting with an empty record book");
            RecordBook::new()
        }
    }
}
