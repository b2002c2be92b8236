//! Interactive prompt and one-shot execution

use crate::app::display;
use crate::core::styles::StyleRole;
use crate::logic::commands::{help_text, CommandResult};
use crate::logic::{LogicError, LogicManager};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "hms> ";

/// Run commands read line by line from `input` until `exit` or end of input
pub fn run<R: BufRead, W: Write>(
    logic: &mut LogicManager,
    input: R,
    out: &mut W,
    use_color: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        StyleRole::Header.paint("HMS ready. Type 'help' for the command list.", use_color)
    )?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", StyleRole::Prompt.paint(PROMPT, use_color))?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            log::debug!("End of input, leaving prompt");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let outcome = logic.execute(&line);
        let exit = outcome.as_ref().is_ok_and(|result| result.exit);
        report(logic, &outcome, out, use_color)?;
        if exit {
            break;
        }
    }
    Ok(())
}

/// Execute a single command line; `Ok(false)` when the command failed
pub fn run_once<W: Write>(
    logic: &mut LogicManager,
    command_text: &str,
    out: &mut W,
    use_color: bool,
) -> io::Result<bool> {
    let outcome = logic.execute(command_text);
    report(logic, &outcome, out, use_color)?;
    Ok(outcome.is_ok())
}

fn report<W: Write>(
    logic: &LogicManager,
    outcome: &Result<CommandResult, LogicError>,
    out: &mut W,
    use_color: bool,
) -> io::Result<()> {
    match outcome {
        Ok(result) => {
            writeln!(out, "{}", StyleRole::Success.paint(&result.feedback, use_color))?;
            if result.show_help {
                writeln!(out)?;
                writeln!(out, "{}", help_text())?;
            }
            if result.show_list {
                display::write_list(
                    out,
                    &logic.filtered_persons(),
                    logic.record_book(),
                    use_color,
                )?;
            }
        }
        Err(e) => {
            writeln!(out, "{}", StyleRole::Error.paint(&e.to_string(), use_color))?;
        }
    }
    Ok(())
}
