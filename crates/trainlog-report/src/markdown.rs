//! Markdown tables, for pasting into issues and wiki pages.

use trainlog_core::date::format_date;

use crate::Report;

/// Render a report as a markdown section.
pub fn render(report: &Report<'_>) -> String {
    let mut md = String::new();

    match report {
        Report::Counts(counts) => {
            md.push_str("### Training Completion Count\n\n");
            md.push_str("| Training | People |\n");
            md.push_str("|----------|--------|\n");
            for (training, count) in counts.iter() {
                md.push_str(&format!("| {} | {} |\n", escape(training), count));
            }
        }
        Report::FiscalYear {
            fiscal_year,
            completions,
        } => {
            md.push_str(&format!(
                "### Completions in fiscal year {}\n\n",
                fiscal_year.year()
            ));
            md.push_str(&format!(
                "**Range:** {} - {}\n\n",
                format_date(fiscal_year.start()),
                format_date(fiscal_year.end())
            ));
            md.push_str("| Training | Completed | People |\n");
            md.push_str("|----------|-----------|--------|\n");
            for (training, people) in completions.iter() {
                let names: Vec<String> = people.iter().map(|p| escape(p)).collect();
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    escape(training),
                    people.len(),
                    names.join(", ")
                ));
            }
        }
        Report::Expiration { reference, report } => {
            md.push_str(&format!(
                "### Expired or expiring trainings by {}\n\n",
                format_date(*reference)
            ));
            if report.is_empty() {
                md.push_str("_None._\n");
                return md;
            }
            md.push_str("| Person | Training | Status |\n");
            md.push_str("|--------|----------|--------|\n");
            for (person, trainings) in report.iter() {
                for t in trainings {
                    md.push_str(&format!(
                        "| {} | {} | {} |\n",
                        escape(person),
                        escape(&t.training_name),
                        t.status
                    ));
                }
            }
        }
    }

    md
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
