//! Chunk partitioning and tab-delimited output for activity-datagen.
//!
//! This crate owns everything between a synthesized [`datagen_core::Record`]
//! and bytes on disk:
//!
//! - [`partitioner`] - splits a total row count into disjoint `(start_id,
//!   count)` chunk plans so parallel workers never collide on key space
//! - [`writer`] - tab-delimited single-table and multi-table writers over
//!   chunk-scoped files
//! - [`populate`] - drives synthesizer -> writer for one chunk and reports
//!   metrics
//!
//! Serialization is kept independent of sampling: writers consume finished
//! records, so the output layout can be swapped without touching the
//! synthesizer.

mod error;
pub mod partitioner;
pub mod populate;
pub mod writer;

// Re-exports for convenience
pub use error::OutputError;
pub use partitioner::{partition, ChunkPlan, RemainderPolicy};
pub use populate::{populate_chunk, ChunkMetrics, ChunkOptions, TableLayout};
pub use writer::{MultiTablePaths, MultiTableWriter, SingleTableWriter};
