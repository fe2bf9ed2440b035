//! The `trainlog fiscal-year` command.

use anyhow::Result;

use trainlog_core::date::FiscalYear;
use trainlog_report::Report;

use super::{parse_training_list, GlobalArgs, Session};

pub fn execute(args: &GlobalArgs, year: i32, trainings: Option<String>) -> Result<()> {
    let session = Session::open(args)?;
    let fiscal_year = FiscalYear::new(year)?;

    let trainings = match trainings.as_deref().map(parse_training_list) {
        Some(list) if !list.is_empty() => list,
        _ => session.config.default_trainings.clone(),
    };
    anyhow::ensure!(!trainings.is_empty(), "no trainings to check");

    let completions = session
        .engine
        .completions_in_fiscal_year(&trainings, fiscal_year);
    let report = Report::FiscalYear {
        fiscal_year,
        completions: &completions,
    };
    println!("{}", session.render(&report)?);
    Ok(())
}
