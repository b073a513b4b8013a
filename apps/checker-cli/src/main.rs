//! Dissertation checker CLI - thin shell around the analysis engine
//!
//! Reads a plain-text file (text extraction from PDF/DOCX happens
//! upstream), runs the compliance analysis, and writes the report to
//! stdout or a file, as plain text or JSON.

use std::fs;
use std::path::PathBuf;

use analysis_engine::{export, AnalysisEngine};
use anyhow::{Context, Result};
use clap::Parser;
use shared_types::DissertationDocument;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dissertation-checker")]
#[command(about = "Check extracted dissertation text against the required structure")]
struct Args {
    /// Plain-text file with the extracted dissertation text
    input: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the structured report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("checker_cli=info")),
        )
        .init();

    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let filename = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let document = DissertationDocument {
        id: filename.clone(),
        filename,
        text_content: vec![text],
        created_at: chrono::Utc::now().timestamp() as u64,
    };

    info!("Analyzing {}", document.filename);
    let report = AnalysisEngine::new()
        .analyze_document(&document)
        .context("Analysis failed")?;
    info!(
        "Found {}/{} required headings",
        report.report.stats.heading_count, report.report.stats.total_headings
    );

    let rendered = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        export::render_report(&report)
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
