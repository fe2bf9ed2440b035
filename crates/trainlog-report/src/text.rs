//! Plain-text tables for terminal output.

use chrono::NaiveDate;
use comfy_table::{Cell, Table};

use trainlog_core::date::{format_date, FiscalYear};
use trainlog_core::query::{CompletionCounts, ExpirationReport, FiscalYearCompletions};

use crate::Report;

/// Render a report as a heading followed by a table.
pub fn render(report: &Report<'_>) -> String {
    match report {
        Report::Counts(counts) => render_counts(counts),
        Report::FiscalYear {
            fiscal_year,
            completions,
        } => render_fiscal_year(*fiscal_year, completions),
        Report::Expiration { reference, report } => render_expiration(*reference, report),
    }
}

fn render_counts(counts: &CompletionCounts) -> String {
    if counts.is_empty() {
        return "Training Completion Count:\nNo completions recorded.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Training", "People"]);
    for (training, count) in counts {
        table.add_row(vec![Cell::new(training), Cell::new(count)]);
    }

    format!("Training Completion Count:\n{table}")
}

fn render_fiscal_year(fiscal_year: FiscalYear, completions: &FiscalYearCompletions) -> String {
    let heading = format!(
        "People who completed the specified trainings in fiscal year {} ({} - {}):",
        fiscal_year.year(),
        format_date(fiscal_year.start()),
        format_date(fiscal_year.end())
    );
    if completions.is_empty() {
        return format!("{heading}\nNo trainings requested.");
    }

    let mut table = Table::new();
    table.set_header(vec!["Training", "Completed", "People"]);
    for (training, people) in completions {
        let names = if people.is_empty() {
            "-".to_string()
        } else {
            people.join(", ")
        };
        table.add_row(vec![
            Cell::new(training),
            Cell::new(people.len()),
            Cell::new(names),
        ]);
    }

    format!("{heading}\n{table}")
}

fn render_expiration(reference: NaiveDate, report: &ExpirationReport) -> String {
    let heading = format!(
        "People with expired or expiring trainings by {}:",
        format_date(reference)
    );
    if report.is_empty() {
        return format!("{heading}\nNo expired or expiring trainings.");
    }

    let mut table = Table::new();
    table.set_header(vec!["Person", "Training", "Status"]);
    for (person, trainings) in report {
        for training in trainings {
            table.add_row(vec![
                Cell::new(person),
                Cell::new(&training.training_name),
                Cell::new(training.status),
            ]);
        }
    }

    format!("{heading}\n{table}")
}
