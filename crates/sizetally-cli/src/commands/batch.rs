//! Batch processing command for multiple order exports.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use clap::Args;
use console::style;
use futures_util::{stream, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use sizetally_core::{
    merge_into, read_document, AggregateMap, CategorySummary, ExtractionResult, LabelParser,
    Report, ReportMetadata, SourceKind,
};

use super::config::load_config;
use super::process::build_parser;
use crate::output::{format_report, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each report (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Lines searched above/below a label for its quantity
    #[arg(short, long)]
    radius: Option<usize>,

    /// Number of documents processed at once
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Merge every document into one report
    #[arg(long)]
    combine: bool,

    /// Also generate a summary CSV with one row per file
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// A successfully processed document.
struct Processed {
    kind: SourceKind,
    result: ExtractionResult,
}

/// Outcome of processing a single file.
struct FileOutcome {
    path: PathBuf,
    result: anyhow::Result<Processed>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Anything that is not a PDF is read as plain text, so only directories
    // are dropped.
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = Arc::new(build_parser(&config, args.radius));

    // Documents are independent; results stay in input order.
    let outcomes: Vec<FileOutcome> = stream::iter(files)
        .map(|path| {
            let parser = Arc::clone(&parser);
            async move {
                let file_start = Instant::now();
                let task_path = path.clone();
                let result = tokio::task::spawn_blocking(move || process_single_file(&task_path, &parser))
                    .await
                    .unwrap_or_else(|e| Err(anyhow::anyhow!("worker failed: {}", e)));

                FileOutcome {
                    path,
                    result,
                    processing_time_ms: file_start.elapsed().as_millis() as u64,
                }
            }
        })
        .buffered(args.jobs.max(1))
        .inspect(|_| overall_pb.inc(1))
        .collect()
        .await;

    overall_pb.finish_with_message("Complete");

    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", outcome.path.display(), e);
            } else {
                error!("Failed to process {}: {}", outcome.path.display(), e);
                anyhow::bail!("Processing failed for {}: {}", outcome.path.display(), e);
            }
        }
    }

    let format = args.format.unwrap_or_else(|| config.output.format.into());
    let successful: Vec<(&FileOutcome, &Processed)> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok().map(|p| (o, p)))
        .collect();

    if args.combine {
        let mut combined = AggregateMap::new();
        let mut warnings = Vec::new();
        for (outcome, processed) in &successful {
            merge_into(&mut combined, &processed.result.aggregate);
            warnings.extend(
                processed
                    .result
                    .warnings
                    .iter()
                    .map(|w| format!("{}: {}", outcome.path.display(), w)),
            );
        }

        let report = Report::build(parser.vocabulary(), &combined).with_metadata(ReportMetadata {
            sources: successful.iter().map(|(o, _)| o.path.display().to_string()).collect(),
            source_kind: successful.first().map(|(_, p)| p.kind),
            generated_at: Some(Utc::now()),
            processing_time_ms: Some(start.elapsed().as_millis() as u64),
            warnings,
        });
        let content = format_report(&report, format)?;

        match &args.output_dir {
            Some(dir) => {
                let path = dir.join(format!("combined.{}", format.extension()));
                fs::write(&path, content)?;
                println!("{} Combined report written to {}", style("✓").green(), path.display());
            }
            None => println!("{}", content),
        }
    } else if let Some(output_dir) = &args.output_dir {
        for (outcome, processed) in &successful {
            let output_name = outcome
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("orders");
            let output_path = output_dir.join(format!("{}.{}", output_name, format.extension()));

            let report = file_report(&parser, outcome, processed);
            fs::write(&output_path, format_report(&report, format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &parser, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<&FileOutcome> = outcomes.iter().filter(|o| o.result.is_err()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            if let Err(e) = &outcome.result {
                println!("  - {}: {}", outcome.path.display(), e);
            }
        }
    }

    Ok(())
}

fn process_single_file(path: &Path, parser: &LabelParser) -> anyhow::Result<Processed> {
    let document = read_document(path)?;
    let result = parser.parse(&document.text);
    Ok(Processed {
        kind: document.kind,
        result,
    })
}

fn file_report(parser: &LabelParser, outcome: &FileOutcome, processed: &Processed) -> Report {
    Report::build(parser.vocabulary(), &processed.result.aggregate).with_metadata(ReportMetadata {
        sources: vec![outcome.path.display().to_string()],
        source_kind: Some(processed.kind),
        generated_at: Some(Utc::now()),
        processing_time_ms: Some(outcome.processing_time_ms),
        warnings: processed.result.warnings.clone(),
    })
}

fn write_summary(path: &Path, parser: &LabelParser, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "unique_combos",
        "total_items",
        "sweatshirts",
        "hoodies",
        "adult_tees",
        "vnecks",
        "long_sleeves",
        "youth",
        "toddler",
        "onesie",
        "apron",
        "tote",
        "processing_time_ms",
        "error",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time = outcome.processing_time_ms.to_string();

        match &outcome.result {
            Ok(processed) => {
                let s = CategorySummary::from_aggregate(parser.vocabulary(), &processed.result.aggregate);
                let counters = [
                    s.unique_combos as u64,
                    s.total_items,
                    s.sweatshirts,
                    s.hoodies,
                    s.adult_tees,
                    s.vnecks,
                    s.long_sleeves,
                    s.youth,
                    s.toddler,
                    s.onesie,
                    s.apron,
                    s.tote,
                ]
                .map(|n| n.to_string());

                let mut record = vec![filename.to_string(), "success".to_string()];
                record.extend(counters);
                record.push(time);
                record.push(String::new());
                wtr.write_record(&record)?;
            }
            Err(e) => {
                let mut record = vec![filename.to_string(), "error".to_string()];
                record.extend(std::iter::repeat_n(String::new(), 12));
                record.push(time);
                record.push(e.to_string());
                wtr.write_record(&record)?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
