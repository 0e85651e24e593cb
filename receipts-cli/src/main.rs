use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::{info, warn};
use receipts_core::{expenses_in_range, sum_by_category};
use receipts_ingest::{OpenAiExtractor, process_directory};
use receipts_report::{format_expenses, render_json, render_totals_json, write_pie_chart};
use std::path::PathBuf;

mod config;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RECEIPTS_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "receipts",
    version = VERSION,
    about = "Extract receipt fields with an LLM and report expenses"
)]
struct Cli {
    /// Directory of receipt images
    dir: PathBuf,

    /// Print extracted receipts as a JSON array
    #[arg(long)]
    print: bool,

    /// Print total expenses between START and END (inclusive, YYYY-MM-DD)
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    expenses: Option<Vec<NaiveDate>>,

    /// Print per-category totals as JSON
    #[arg(long)]
    totals: bool,

    /// Write a pie chart (SVG) of expenses by category
    #[arg(long)]
    plot: bool,

    /// Where to write the pie chart (default from config)
    #[arg(long, value_name = "PATH")]
    plot_output: Option<PathBuf>,

    /// Config file (default: ~/.receipts/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log progress for each image
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Ok(p) = dotenvy::dotenv() {
        info!("loaded {}", p.display());
    }

    let cfg = config::load_config(cli.config.as_deref())?;
    let extractor_cfg = cfg.extractor_config(|k| std::env::var(k).ok())?;
    let extractor = OpenAiExtractor::new(extractor_cfg)?;

    let batch = process_directory(&extractor, &cli.dir)
        .await
        .with_context(|| format!("processing {}", cli.dir.display()))?;
    if !batch.failures.is_empty() {
        warn!(
            "{} of {} images could not be extracted and were skipped",
            batch.failures.len(),
            batch.failures.len() + batch.receipts.len()
        );
        for f in &batch.failures {
            info!("  {}: {}", f.file, f.reason);
        }
    }
    let receipts = batch.receipts;

    if cli.print {
        println!("{}", render_json(&receipts)?);
    }

    if let Some(range) = cli.expenses {
        // clap enforces exactly two values
        let (start, end) = (range[0], range[1]);
        let total = expenses_in_range(&receipts, start, end);
        println!("{}", format_expenses(start, end, total));
    }

    if cli.totals {
        println!("{}", render_totals_json(&sum_by_category(&receipts))?);
    }

    if cli.plot {
        let path = cli.plot_output.unwrap_or(cfg.report.chart_path);
        if write_pie_chart(&path, &sum_by_category(&receipts))? {
            println!("Pie chart saved to {}", path.display());
        } else {
            println!("No valid data to plot.");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
