//! Synthetic user/game activity data generator for analytics load testing.
//!
//! This crate orchestrates the generation pipeline: it partitions a
//! requested row count into independent chunks, runs each chunk's
//! synthesizer/writer pair (inline for one chunk, on blocking tasks for
//! many), and aggregates run metrics. The pieces it wires together live in
//! the workspace member crates:
//!
//! - `datagen-core` - profile, weighted tables, record model
//! - `datagen-synth` - attribute catalogs and the record synthesizer
//! - `datagen-output` - chunk partitioner and tab-delimited writers

pub mod runner;

// Re-exports for convenience
pub use datagen_core::{Profile, Record};
pub use datagen_output::RemainderPolicy;
pub use datagen_synth::RecordSynthesizer;
pub use runner::{run_generation, LogProgress, ProgressObserver, RunMetrics, RunOptions};
