//! Run orchestration: partition, dispatch chunk jobs, aggregate metrics.

use anyhow::{Context, Result};
use datagen_core::Profile;
use datagen_output::partitioner::describe_plan;
use datagen_output::{
    partition, populate_chunk, ChunkMetrics, ChunkOptions, ChunkPlan, RemainderPolicy, TableLayout,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Total number of records to generate.
    pub lines: u64,
    /// Records per parallel chunk.
    pub lines_per_chunk: u64,
    /// Directory receiving the output files; created if missing.
    pub output_dir: PathBuf,
    /// Emit the normalized customer/revenue/facts layout.
    pub multi_table: bool,
    /// Include the name/email/phone/address columns (single-table layout).
    pub extra_data: bool,
    /// Base random seed; each chunk derives its own RNG state from this.
    pub seed: u64,
    /// What to do with leftover rows when `lines` does not divide evenly.
    pub remainder: RemainderPolicy,
}

/// Aggregate metrics for a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub rows_written: u64,
    pub revenue_rows_written: u64,
    pub fact_rows_written: u64,
    pub file_size_bytes: u64,
    pub chunks: usize,
    pub total_duration: Duration,
}

impl RunMetrics {
    fn absorb(&mut self, chunk: &ChunkMetrics) {
        self.rows_written += chunk.rows_written;
        self.revenue_rows_written += chunk.revenue_rows_written;
        self.fact_rows_written += chunk.fact_rows_written;
        self.file_size_bytes += chunk.file_size_bytes;
    }
}

/// Observer invoked as chunk jobs complete.
///
/// Progress reporting is a side channel, not control flow: the runner works
/// identically whether or not anyone is listening.
pub trait ProgressObserver: Send + Sync {
    fn chunk_completed(&self, plan: &ChunkPlan, metrics: &ChunkMetrics);
}

/// Default observer that reports chunk completion through `tracing`.
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn chunk_completed(&self, plan: &ChunkPlan, metrics: &ChunkMetrics) {
        info!(
            "chunk {}: {} rows done in {:?} ({:.2} rows/sec)",
            plan.index,
            metrics.rows_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );
    }
}

/// Generate the requested rows.
///
/// A request fitting in one chunk runs inline and, in single-table mode,
/// emits the header row. Larger requests are partitioned into disjoint id
/// ranges and dispatched as one blocking task per chunk; every chunk owns
/// its own seed-derived RNG and its own files, so tasks share nothing
/// mutable. A failed chunk surfaces after all tasks have finished and never
/// touches other chunks' output.
pub async fn run_generation(
    profile: &Profile,
    options: &RunOptions,
    observer: &dyn ProgressObserver,
) -> Result<RunMetrics> {
    let start = Instant::now();

    profile.validate().context("invalid generation profile")?;
    std::fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("failed to create output directory {:?}", options.output_dir))?;

    let plans = partition(
        options.lines,
        options.lines_per_chunk,
        profile.id_start,
        options.remainder,
    );

    let mut metrics = RunMetrics {
        chunks: plans.len(),
        ..RunMetrics::default()
    };

    match plans.as_slice() {
        [] => {}
        [plan] => {
            info!(
                "Single process mode, generating data to {:?}",
                options.output_dir
            );
            let chunk_options = chunk_options(options, None, true);
            let chunk_metrics = populate_chunk(profile, plan, &chunk_options)
                .with_context(|| format!("chunk {} failed", plan.index))?;
            observer.chunk_completed(plan, &chunk_metrics);
            metrics.absorb(&chunk_metrics);
        }
        plans => {
            info!(
                "Parallel mode, generating data to {:?} ({} chunks)",
                options.output_dir,
                plans.len()
            );
            info!("{}", describe_plan(plans));

            let mut handles = Vec::with_capacity(plans.len());
            for plan in plans {
                let profile = profile.clone();
                let plan = *plan;
                let chunk_options = chunk_options(options, Some(plan.index), false);
                handles.push((
                    plan,
                    tokio::task::spawn_blocking(move || {
                        populate_chunk(&profile, &plan, &chunk_options)
                    }),
                ));
            }

            let mut first_failure: Option<(u64, anyhow::Error)> = None;
            for (plan, handle) in handles {
                match handle.await {
                    Ok(Ok(chunk_metrics)) => {
                        observer.chunk_completed(&plan, &chunk_metrics);
                        metrics.absorb(&chunk_metrics);
                    }
                    Ok(Err(e)) => {
                        error!("chunk {} failed: {e:#}", plan.index);
                        first_failure.get_or_insert((plan.index, e.into()));
                    }
                    Err(join_error) => {
                        error!("chunk {} task panicked: {join_error}", plan.index);
                        first_failure.get_or_insert((plan.index, join_error.into()));
                    }
                }
            }
            if let Some((index, e)) = first_failure {
                return Err(e.context(format!("chunk {index} failed")));
            }
        }
    }

    metrics.total_duration = start.elapsed();
    info!(
        "Run complete: {} rows across {} chunk(s), {} bytes in {:?}",
        metrics.rows_written, metrics.chunks, metrics.file_size_bytes, metrics.total_duration
    );
    Ok(metrics)
}

fn chunk_options(options: &RunOptions, suffix: Option<u64>, header: bool) -> ChunkOptions {
    let layout = if options.multi_table {
        TableLayout::Multi
    } else {
        TableLayout::Single {
            extra_data: options.extra_data,
            header,
        }
    };
    ChunkOptions {
        output_dir: options.output_dir.clone(),
        layout,
        chunk_suffix: suffix,
        seed: options.seed,
    }
}
