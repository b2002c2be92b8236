//! Configuration file merging and one-shot runs through the startup path

use crate::common::*;
use hms::app::cli::args::Args;
use hms::app::startup::{run, StartupError};
use hms::storage::{JsonRecordBookStorage, RecordBookStorage};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

fn words(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("hms.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_one_shot_checkin_uses_configured_data_file() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("records").join("patients.json");
    let config = write_config(
        &dir,
        &format!(
            "data-file = {:?}\nlog-level = \"off\"\ncolor = false\n",
            data_file.to_string_lossy()
        ),
    );

    let args = Args {
        config_file: Some(config),
        command: words(CHECKIN_AMY),
        ..Args::new()
    };
    assert!(run(args).unwrap());

    let book = JsonRecordBookStorage::new(&data_file).read().unwrap().unwrap();
    assert_eq!(book.persons().len(), 1);
    assert_eq!(book.persons()[0].nric().as_str(), "S1234567A");
}

#[test]
#[serial]
fn test_one_shot_failure_reports_false() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "log-level = \"off\"\n");
    let args = Args {
        config_file: Some(config),
        data_file: Some(dir.path().join("hms.json")),
        no_color: true,
        command: words("undo"),
        ..Args::new()
    };
    assert!(!run(args).unwrap());
}

#[test]
#[serial]
fn test_invalid_config_stops_startup() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "history-limit = 0\n");
    let args = Args {
        config_file: Some(config),
        data_file: Some(dir.path().join("hms.json")),
        command: words("list"),
        ..Args::new()
    };
    match run(args) {
        Err(StartupError::Config(e)) => {
            assert_eq!(e.details(), "Option --history-limit must be greater than 0")
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
#[serial]
fn test_missing_config_file_stops_startup() {
    let dir = TempDir::new().unwrap();
    let args = Args {
        config_file: Some(dir.path().join("absent.toml")),
        command: words("list"),
        ..Args::new()
    };
    assert!(matches!(run(args), Err(StartupError::Config(_))));
}

#[test]
#[serial]
fn test_log_file_none_overrides_configured_log_file() {
    let dir = TempDir::new().unwrap();
    let log_file = dir.path().join("hms.log");
    let config = write_config(
        &dir,
        &format!("log-file = {:?}\n", log_file.to_string_lossy()),
    );
    let data_file = dir.path().join("hms.json");
    let argv: Vec<String> = vec![
        "hms".to_string(),
        "--config-file".to_string(),
        config.to_string_lossy().into_owned(),
        "--data-file".to_string(),
        data_file.to_string_lossy().into_owned(),
        "--log-file".to_string(),
        "none".to_string(),
        "--log-level".to_string(),
        "info".to_string(),
        "--no-color".to_string(),
        "list".to_string(),
    ];

    let args = Args::parse_from_args(&argv, false).unwrap();
    assert!(args.log_file.is_none());
    assert!(run(args).unwrap());
    assert!(!log_file.exists());
    assert!(!dir.path().join("none").exists());
}
