//! The `trainlog interactive` command.
//!
//! A menu loop over one loaded roster: pick a report, answer its prompts, see
//! the result, repeat until exit or end of input.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use trainlog_core::date::{parse_reference_date, FiscalYear};
use trainlog_report::Report;

use super::{parse_training_list, GlobalArgs, Session};

pub fn execute(args: &GlobalArgs) -> Result<()> {
    let session = Session::open(args)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&session, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive the menu loop, reading answers from `input` and writing to `output`.
pub fn run<R: BufRead, W: Write>(session: &Session, input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "Hello! Welcome to the Training Tracker")?;

    loop {
        writeln!(output, "\nPlease select a task to perform:")?;
        writeln!(output, "1: Count number of people who completed each training")?;
        writeln!(
            output,
            "2: List people who completed specified trainings in a fiscal year"
        )?;
        writeln!(output, "3: List people with expired or soon-to-expire trainings")?;
        writeln!(output, "4: Exit")?;

        let Some(choice) = prompt(input, output, "Enter the task number (1/2/3/4): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let counts = session.engine.count_completions();
                writeln!(output, "\n{}", session.render(&Report::Counts(&counts))?)?;
            }
            "2" => {
                if !fiscal_year_task(session, input, output)? {
                    break;
                }
            }
            "3" => {
                let Some(text) = prompt(
                    input,
                    output,
                    "\nEnter the date to check (MM/DD/YYYY, e.g., 10/01/2023): ",
                )?
                else {
                    break;
                };
                match parse_reference_date(&text) {
                    Ok(reference) => {
                        let report = session.engine.expiring_trainings(reference);
                        let rendered = session.render(&Report::Expiration {
                            reference,
                            report: &report,
                        })?;
                        writeln!(output, "\n{rendered}")?;
                    }
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "4" => {
                writeln!(output, "Exiting the application. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please select a valid task number")?,
        }
    }

    Ok(())
}

/// Returns `false` when input ran out mid-task.
fn fiscal_year_task<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let defaults = &session.config.default_trainings;
    writeln!(output, "\nWould you like to use the default list of trainings?")?;
    writeln!(output, "1: Yes, use default list ({})", defaults.join(", "))?;
    writeln!(output, "2: No, I will provide my own list of trainings")?;

    let Some(list_choice) = prompt(input, output, "Enter your choice (1/2): ")? else {
        return Ok(false);
    };

    let trainings = match list_choice.as_str() {
        "1" => defaults.clone(),
        "2" => {
            let Some(list) = prompt(input, output, "Enter the trainings separated by commas: ")?
            else {
                return Ok(false);
            };
            parse_training_list(&list)
        }
        _ => {
            writeln!(output, "Invalid choice. Using default list of trainings.")?;
            defaults.clone()
        }
    };

    let Some(year_text) = prompt(input, output, "\nEnter the fiscal year (e.g., 2024): ")? else {
        return Ok(false);
    };
    let fiscal_year = match year_text.parse::<i32>() {
        Ok(year) if year >= 1 => FiscalYear::new(year),
        _ => {
            writeln!(output, "Invalid fiscal year: {year_text}")?;
            return Ok(true);
        }
    };
    let fiscal_year = match fiscal_year {
        Ok(fy) => fy,
        Err(e) => {
            writeln!(output, "{e}")?;
            return Ok(true);
        }
    };

    let completions = session
        .engine
        .completions_in_fiscal_year(&trainings, fiscal_year);
    let rendered = session.render(&Report::FiscalYear {
        fiscal_year,
        completions: &completions,
    })?;
    writeln!(output, "\n{rendered}")?;
    Ok(true)
}

/// Print `message` and read one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
