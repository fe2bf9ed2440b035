//! The `trainlog expiring` command.

use anyhow::Result;
use chrono::NaiveDate;

use trainlog_report::Report;

use super::{GlobalArgs, Session};

pub fn execute(args: &GlobalArgs, reference: NaiveDate) -> Result<()> {
    let session = Session::open(args)?;
    let report = session.engine.expiring_trainings(reference);
    println!(
        "{}",
        session.render(&Report::Expiration {
            reference,
            report: &report,
        })?
    );
    Ok(())
}
