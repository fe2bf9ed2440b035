//! The `trainlog validate` command.

use anyhow::Result;

use trainlog_core::config::load_config_from;
use trainlog_core::loader::{load_roster, validate_roster};

use super::GlobalArgs;

pub fn execute(args: &GlobalArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let path = args.roster.as_deref().unwrap_or(&config.default_roster);

    let roster = load_roster(path)?;
    let completions: usize = roster.iter().map(|p| p.completions.len()).sum();
    println!(
        "Roster: {} ({} people, {} completions)",
        path.display(),
        roster.len(),
        completions
    );

    let warnings = validate_roster(&roster);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.person, w.message);
    }

    if warnings.is_empty() {
        println!("Roster valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
