// src/main.rs
mod config;
mod export;
mod extractors;
mod pdf;
mod pipeline;
mod utils;

use clap::Parser;
use config::KeywordConfig;
use export::ExportManager;
use pipeline::ResultAggregator;
use std::path::PathBuf;
use utils::AppError;

/// Command Line Interface for the research paper fact extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the PDF documents to parse
    #[arg(long = "pdf_dir")]
    pdf_dir: PathBuf,

    /// Path to the keyword configuration file
    #[arg(long, default_value = "keywords.json")]
    keywords: PathBuf,

    /// Directory the reports are written to
    #[arg(long = "output_dir", default_value = "./results")]
    output_dir: PathBuf,

    /// Also export the results to an Excel workbook
    #[arg(long)]
    excel: bool,

    /// Also export the results to an HTML table
    #[arg(long)]
    html: bool,

    /// Dump every document's results to the log after the run
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI arguments, then set up logging (reads RUST_LOG env var)
    let args = Args::parse();
    utils::logging::setup_logging(args.verbose);
    tracing::info!("Starting processing for args: {:?}", args);

    // 2. Load the keyword configuration; invalid configuration is fatal
    //    before any document is touched
    let keyword_config = KeywordConfig::load(&args.keywords)?;
    if keyword_config.is_empty() {
        tracing::warn!("Keyword configuration has no categories");
    }

    // 3. Run the extraction pipeline over the document directory
    let aggregator = ResultAggregator::new(&keyword_config)?;
    let results = aggregator.run(&args.pdf_dir)?;
    if results.is_empty() {
        tracing::warn!("No documents were processed");
    } else {
        tracing::info!("Processed {} documents", results.len());
    }

    // 4. Write the reports; JSON is always written
    let exporter = ExportManager::new(&args.output_dir, &args.pdf_dir)?;
    exporter.write_json(&results)?;

    if args.verbose {
        export::log_results(&results);
    }

    if args.excel {
        exporter.write_excel(&results, &keyword_config)?;
    }

    if args.html {
        exporter.write_html(&results, &keyword_config)?;
    }

    Ok(())
}
