use std::process::ExitCode;

fn main() -> ExitCode {
    hms::app::startup::startup()
}
