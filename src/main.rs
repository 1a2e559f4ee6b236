//! Command-line interface for activity-datagen
//!
//! # Usage Examples
//!
//! ```bash
//! # 10k flat rows to the system temp directory
//! activity-datagen --lines 10000
//!
//! # 1M rows in parallel chunks of 50k, with the extra user columns
//! activity-datagen --lines 1000000 --extra-data --output-path /data/mock
//!
//! # Normalized customer/revenue/facts tables, reproducible seed
//! activity-datagen --lines 200000 --multiple-tables --seed 7 \
//!   --output-path /data/mock
//!
//! # Override sampling weights from a profile file
//! activity-datagen --lines 50000 --profile profile.yaml
//! ```

use activity_datagen::{run_generation, LogProgress, RunOptions};
use anyhow::Context;
use clap::Parser;
use datagen_core::Profile;
use datagen_output::RemainderPolicy;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "activity-datagen")]
#[command(about = "Synthetic user/game activity data generator for analytics load testing")]
#[command(version)]
struct Cli {
    /// Number of lines to generate
    #[arg(long, short = 'l')]
    lines: u64,

    /// Number of lines to generate per chunk
    #[arg(long, short = 'c', default_value = "50000")]
    lines_per_chunk: u64,

    /// Directory path where output should be written (default: system temp dir)
    #[arg(long, short = 'p')]
    output_path: Option<PathBuf>,

    /// Generate data in multi-table format (customer/revenue/facts)
    #[arg(long, short = 'm')]
    multiple_tables: bool,

    /// Generate additional user information (name, email, phone, address)
    #[arg(long, short = 'e')]
    extra_data: bool,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Path to a YAML profile overriding the built-in sampling weights
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Silently drop leftover rows when --lines is not a multiple of
    /// --lines-per-chunk, matching the classic generator
    #[arg(long)]
    truncate_remainder: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let profile = match &cli.profile {
        Some(path) => Profile::from_file(path)
            .with_context(|| format!("failed to load profile from {path:?}"))?,
        None => Profile::default(),
    };

    let options = RunOptions {
        lines: cli.lines,
        lines_per_chunk: cli.lines_per_chunk,
        output_dir: cli.output_path.unwrap_or_else(std::env::temp_dir),
        multi_table: cli.multiple_tables,
        extra_data: cli.extra_data,
        seed: cli.seed,
        remainder: if cli.truncate_remainder {
            RemainderPolicy::Truncate
        } else {
            RemainderPolicy::EmitFinalChunk
        },
    };

    let start = Instant::now();
    let metrics = run_generation(&profile, &options, &LogProgress).await?;
    println!(
        "Generated {} rows across {} chunk(s) in {:?}",
        metrics.rows_written,
        metrics.chunks,
        start.elapsed()
    );
    Ok(())
}
