//! The `trainlog init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create trainlog.toml
    if std::path::Path::new("trainlog.toml").exists() {
        println!("trainlog.toml already exists, skipping.");
    } else {
        std::fs::write("trainlog.toml", SAMPLE_CONFIG)?;
        println!("Created trainlog.toml");
    }

    // Create sample roster
    if std::path::Path::new("trainings.txt").exists() {
        println!("trainings.txt already exists, skipping.");
    } else {
        std::fs::write("trainings.txt", SAMPLE_ROSTER)?;
        println!("Created trainings.txt");
    }

    println!("\nNext steps:");
    println!("  1. Replace trainings.txt with your organization's roster");
    println!("  2. Run: trainlog validate");
    println!("  3. Run: trainlog count");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# trainlog configuration

default_roster = "trainings.txt"
default_trainings = [
    "Electrical Safety for Labs",
    "X-Ray Safety",
    "Laboratory Safety Training",
]
warning_window_days = 30
default_format = "text"
"#;

const SAMPLE_ROSTER: &str = r#"[
    {
        "name": "Ada Lovelace",
        "completions": [
            { "name": "X-Ray Safety", "timestamp": "1/1/2020", "expires": "" },
            { "name": "X-Ray Safety", "timestamp": "6/1/2021", "expires": "6/1/2022" },
            { "name": "Laboratory Safety Training", "timestamp": "8/15/2023", "expires": "10/15/2023" }
        ]
    },
    {
        "name": "Grace Hopper",
        "completions": [
            { "name": "Electrical Safety for Labs", "timestamp": "7/1/2024", "expires": "7/1/2025" },
            { "name": "Laboratory Safety Training", "timestamp": "12/1/2023", "expires": "" }
        ]
    }
]
"#;
