//! Report formatting and CSV export.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use sizetally_core::models::config;
use sizetally_core::{CategorySummary, Report, ReportRow, Sheet, Vocabulary};

/// Column headers of exported sheets.
pub const SHEET_HEADERS: [&str; 2] = ["Style / Size", "Total Quantity Ordered"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

impl From<config::OutputFormat> for OutputFormat {
    fn from(format: config::OutputFormat) -> Self {
        match format {
            config::OutputFormat::Json => OutputFormat::Json,
            config::OutputFormat::Csv => OutputFormat::Csv,
            config::OutputFormat::Text => OutputFormat::Text,
        }
    }
}

pub fn format_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(report.rows.iter()),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv<'a>(rows: impl Iterator<Item = &'a ReportRow>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    write_rows(&mut wtr, rows)?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn write_rows<'a, W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    rows: impl Iterator<Item = &'a ReportRow>,
) -> anyhow::Result<()> {
    wtr.write_record(SHEET_HEADERS)?;
    for row in rows {
        let quantity = row.quantity.to_string();
        wtr.write_record([row.label.as_str(), quantity.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn format_summary(summary: &CategorySummary) -> String {
    let mut output = String::new();

    output.push_str("Summary:\n");
    let _ = writeln!(output, "  Total unique combos: {}", summary.unique_combos);
    let _ = writeln!(output, "  Total items: {}", summary.total_items);
    output.push('\n');

    output.push_str("By Category:\n");
    for (name, total) in summary.category_totals() {
        let _ = writeln!(output, "  - {}: {}", name, total);
    }

    output
}

fn format_text(report: &Report) -> String {
    let mut output = format_summary(&report.summary);

    if report.rows.is_empty() {
        output.push_str("\nNo style/size lines found.\n");
        return output;
    }

    let width = report
        .rows
        .iter()
        .map(|r| r.label.chars().count())
        .chain([SHEET_HEADERS[0].len()])
        .max()
        .unwrap_or_default();

    output.push('\n');
    let _ = writeln!(output, "{:<width$}  {}", SHEET_HEADERS[0], "Qty", width = width);
    for row in &report.rows {
        let _ = writeln!(output, "{:<width$}  {}", row.label, row.quantity, width = width);
    }

    output
}

/// Write report sheets as CSV files into `dir`.
///
/// `all.csv` is always written; the sweatshirt and hoodie subsets only
/// when `include_subsets` is set.
pub fn export_sheets(
    report: &Report,
    vocabulary: &Vocabulary,
    dir: &Path,
    include_subsets: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for sheet in Sheet::ALL {
        if sheet != Sheet::All && !include_subsets {
            continue;
        }
        let path = dir.join(format!("{}.csv", sheet.file_stem()));
        let mut wtr = csv::Writer::from_path(&path)?;
        write_rows(&mut wtr, report.sheet(vocabulary, sheet))?;
        written.push(path);
    }

    Ok(written)
}
