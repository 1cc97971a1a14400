// CSV export of the admin report.
//
// Purpose
// - Render the searched admin entries as a spreadsheet friendly CSV document.

use crate::modules::reports::core::admin::ReportEntry;
use crate::shared::core::calendar::format_day_first;
use anyhow::Context;
use chrono::NaiveDate;
use csv::WriterBuilder;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("report_entries_{}.csv", today.format("%Y-%m-%d"))
}

pub fn generate_csv_content<W: Write>(entries: &[ReportEntry], writer: W) -> anyhow::Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer
        .write_record(["Date", "Project", "User", "Description", "Hours"])
        .context("Failed to write CSV header")?;

    entries.iter().try_for_each(|entry| {
        csv_writer
            .write_record([
                format_day_first(entry.date),
                entry.project_name.clone(),
                entry.user_name.clone(),
                entry.description.clone(),
                entry.hours.to_string(),
            ])
            .with_context(|| format!("Failed to write CSV record for {}", entry.id))
    })?;

    csv_writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

pub fn export(entries: &[ReportEntry], today: NaiveDate) -> anyhow::Result<CsvExport> {
    let mut buffer = Vec::new();
    generate_csv_content(entries, &mut buffer)?;
    Ok(CsvExport {
        filename: export_filename(today),
        content: String::from_utf8(buffer).context("CSV output is not UTF-8")?,
    })
}
