//! Core types for the activity-datagen framework.
//!
//! This crate defines the shared building blocks used by the synthesizer and
//! output crates:
//!
//! - [`WeightedTable`] - discrete weighted random selection
//! - [`Profile`] - the immutable generation configuration, loadable from YAML
//! - [`Record`] - one fully formed synthetic user/activity entity
//!
//! All types here are plain data: no IO beyond profile loading, no global
//! state. A `Profile` is constructed (or loaded) once, validated, and then
//! shared read-only across all parallel chunk workers.

pub mod profile;
pub mod record;
pub mod weighted;

// Re-exports for convenience
pub use profile::{Profile, ProfileError};
pub use record::{Country, Game, Gender, PlayCounts, PlayEvent, Record};
pub use weighted::{WeightedTable, WeightedTableError};
