//! The `trainlog count` command.

use anyhow::Result;

use trainlog_report::Report;

use super::{GlobalArgs, Session};

pub fn execute(args: &GlobalArgs) -> Result<()> {
    let session = Session::open(args)?;
    let counts = session.engine.count_completions();
    println!("{}", session.render(&Report::Counts(&counts))?);
    Ok(())
}
