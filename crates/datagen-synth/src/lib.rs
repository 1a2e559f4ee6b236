//! Record synthesizer for the activity-datagen framework.
//!
//! This crate turns a [`datagen_core::Profile`] plus a seed into a stream of
//! fully formed [`datagen_core::Record`]s. Generation is a pure function of
//! profile, seed, and starting id - no record depends on a previously
//! generated one - so disjoint id ranges can be produced by independent
//! parallel workers.
//!
//! # Architecture
//!
//! ```text
//! Profile (weights, ratios, bounds)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ RecordSynthesizer │
//! │                   │
//! │  - weighted tables│
//! │  - rng (StdRng)   │
//! │  - next_id        │
//! └─────────┬─────────┘
//!           │  catalogs + samplers
//!           ▼
//!     Record { id, gender, age, country, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_core::Profile;
//! use datagen_synth::RecordSynthesizer;
//!
//! let profile = Profile::default();
//! let mut synth = RecordSynthesizer::new(&profile, 42).unwrap();
//! let record = synth.next_record();
//! assert_eq!(record.id, profile.id_start);
//! assert_eq!(record.play_counts.total(), record.tenure_days);
//! ```

pub mod catalogs;
pub mod samplers;
pub mod synthesizer;

// Re-exports for convenience
pub use synthesizer::{RecordIterator, RecordSynthesizer, SynthError};
