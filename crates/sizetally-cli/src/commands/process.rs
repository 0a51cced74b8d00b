//! Process command - tally styles and sizes from a single order export.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use sizetally_core::{read_document, LabelParser, Report, ReportMetadata, TallyConfig};

use super::config::load_config;
use crate::output::{export_sheets, format_report, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Lines searched above/below a label for its quantity
    #[arg(short, long)]
    radius: Option<usize>,

    /// Directory to write CSV sheets into
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Also export the Sweatshirts and Hoodies sheets
    #[arg(long)]
    subsets: bool,
}

/// Build a parser from config, letting a CLI radius win.
pub fn build_parser(config: &TallyConfig, radius: Option<usize>) -> LabelParser {
    let parser = LabelParser::from_config(&config.extraction);
    match radius {
        Some(radius) => parser.with_quantity_radius(radius),
        None => parser,
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Reading document...");

    let document = read_document(&args.input)?;

    pb.set_message("Extracting style/size lines...");
    let parser = build_parser(&config, args.radius);
    let result = parser.parse(&document.text);

    for warning in &result.warnings {
        warn!("{}: {}", args.input.display(), warning);
    }

    let report = Report::build(parser.vocabulary(), &result.aggregate).with_metadata(ReportMetadata {
        sources: vec![args.input.display().to_string()],
        source_kind: Some(document.kind),
        generated_at: Some(Utc::now()),
        processing_time_ms: Some(start.elapsed().as_millis() as u64),
        warnings: result.warnings.clone(),
    });

    pb.finish_and_clear();

    let format = args.format.unwrap_or_else(|| config.output.format.into());
    let output = format_report(&report, format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if let Some(dir) = &args.export_dir {
        let include_subsets = args.subsets || config.output.export_subsets;
        for path in export_sheets(&report, parser.vocabulary(), dir, include_subsets)? {
            println!("{} Sheet written to {}", style("✓").green(), path.display());
        }
    }

    debug!(
        "Processed {} lines into {} rows in {:?}",
        result.line_count,
        report.rows.len(),
        start.elapsed()
    );

    Ok(())
}
