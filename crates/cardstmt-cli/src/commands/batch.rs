//! Batch command for parsing multiple statements.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use cardstmt_core::invoice::{ExtractionResult, InvoiceParser, StatementParser};
use cardstmt_core::models::config::StatementConfig;

use super::parse::{format_invoice, OutputFormat};
use super::{is_supported, load_config, read_document};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching PDF statements or JSON token files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of parsing a single file.
struct FileResult {
    path: PathBuf,
    outcome: Result<ExtractionResult, String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = Arc::new(load_config(config_path)?);

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_supported(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Parsing is CPU-bound, so each file runs on the blocking pool
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        let permit = semaphore.clone().acquire_owned().await?;
        let config = Arc::clone(&config);
        let pb = pb.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let result = process_file(path, &config);
            pb.inc(1);
            drop(permit);
            result
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle.await?;
        if let Err(e) = &result.outcome {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), e);
            } else {
                error!("Failed to process {}: {}", result.path.display(), e);
                pb.abandon();
                anyhow::bail!("Processing failed for {}: {}", result.path.display(), e);
            }
        }
        results.push(result);
    }

    pb.finish_and_clear();

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Ok(extraction) = &result.outcome {
                let output_path = output_path(output_dir, &result.path, args.format);
                let content = format_invoice(&extraction.invoice, args.format, false)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.outcome.is_err()).collect();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            if let Err(e) = &result.outcome {
                eprintln!("  - {}: {}", result.path.display(), e);
            }
        }
    }

    Ok(())
}

fn process_file(path: PathBuf, config: &StatementConfig) -> FileResult {
    let file_start = Instant::now();

    let outcome = read_document(&path, config)
        .and_then(|doc| {
            let parser = StatementParser::from_config(&config.extraction);
            Ok(parser.parse(&doc.pages)?)
        })
        .map_err(|e| e.to_string());

    FileResult {
        path,
        outcome,
        processing_time_ms: file_start.elapsed().as_millis() as u64,
    }
}

fn output_path(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("statement");
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "customer",
        "statement_start_date",
        "statement_end_date",
        "total_balance",
        "minimum_payment",
        "transactions",
        "warnings",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &result.outcome {
            Ok(extraction) => {
                let invoice = &extraction.invoice;
                wtr.write_record([
                    filename,
                    "success",
                    &invoice.customer.name,
                    &invoice.statement_start_date.to_string(),
                    &invoice.statement_end_date.to_string(),
                    &invoice.balance.total.to_string(),
                    &invoice.minimum_payment.total.to_string(),
                    &invoice.transactions.len().to_string(),
                    &extraction.warnings.len().to_string(),
                    &result.processing_time_ms.to_string(),
                    "",
                ])?;
            }
            Err(e) => {
                wtr.write_record([
                    filename,
                    "error",
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    &result.processing_time_ms.to_string(),
                    e,
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
