//! Record synthesis: one `Record` per id, from profile + seeded RNG.

use crate::samplers::{address, contact, names, timestamp};
use datagen_core::{
    Game, Gender, PlayCounts, PlayEvent, Profile, Record, WeightedTable, WeightedTableError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Mixing constant for deriving a per-range RNG seed from the base seed.
const SEED_MIX: u64 = 0x9E3779B97F4A7C15;

/// Error type for synthesizer construction.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// A profile weight table was empty or summed to zero
    #[error("invalid {table} weight table: {source}")]
    WeightTable {
        table: &'static str,
        source: WeightedTableError,
    },

    /// Profile validation failed
    #[error("invalid profile: {0}")]
    Profile(#[from] datagen_core::ProfileError),
}

/// Weighted tables built once from the profile.
#[derive(Debug, Clone)]
struct SamplerTables {
    gender: WeightedTable<Gender>,
    age: WeightedTable<u8>,
    country: WeightedTable<datagen_core::Country>,
    male_games: WeightedTable<Game>,
    female_games: WeightedTable<Game>,
}

impl SamplerTables {
    fn build(profile: &Profile) -> Result<Self, SynthError> {
        Ok(Self {
            gender: build_table("gender", &profile.gender_weights)?,
            age: build_table("age", &profile.age_weights)?,
            country: build_table("country", &profile.country_weights)?,
            male_games: build_table("male_game", &profile.male_game_weights)?,
            female_games: build_table("female_game", &profile.female_game_weights)?,
        })
    }

    fn games(&self, gender: Gender) -> &WeightedTable<Game> {
        match gender {
            Gender::Male => &self.male_games,
            Gender::Female => &self.female_games,
        }
    }
}

fn build_table<T: Clone>(
    table: &'static str,
    entries: &[(T, u32)],
) -> Result<WeightedTable<T>, SynthError> {
    WeightedTable::new(entries.to_vec())
        .map_err(|source| SynthError::WeightTable { table, source })
}

/// Produces fully formed records for consecutive ids.
///
/// Each record is a pure function of the profile, the seed, and its id range
/// position; no record depends on a previously generated one. A chunk
/// worker calls [`with_start_id`](Self::with_start_id) with the first id of
/// its reserved range, which re-seeds the RNG so disjoint ranges yield
/// independent, reproducible streams.
pub struct RecordSynthesizer {
    profile: Profile,
    tables: SamplerTables,
    rng: StdRng,
    base_seed: u64,
    next_id: u64,
    include_play_events: bool,
}

impl RecordSynthesizer {
    /// Create a synthesizer for the given profile and seed, positioned at
    /// `profile.id_start`.
    pub fn new(profile: &Profile, seed: u64) -> Result<Self, SynthError> {
        profile.validate()?;
        let tables = SamplerTables::build(profile)?;
        let start = profile.id_start;
        Ok(Self {
            profile: profile.clone(),
            tables,
            rng: StdRng::seed_from_u64(mix_seed(seed, start)),
            base_seed: seed,
            next_id: start,
            include_play_events: false,
        })
    }

    /// Position the synthesizer at an arbitrary id.
    ///
    /// Re-seeds the RNG from the base seed and the id, so a chunk starting
    /// at id N always produces the same stream regardless of which worker
    /// runs it.
    pub fn with_start_id(mut self, id: u64) -> Self {
        self.next_id = id;
        self.rng = StdRng::seed_from_u64(mix_seed(self.base_seed, id));
        self
    }

    /// Also synthesize one play event per tenure day (multi-table shape).
    pub fn with_play_events(mut self, include: bool) -> Self {
        self.include_play_events = include;
        self
    }

    /// Next id to be assigned.
    pub fn current_id(&self) -> u64 {
        self.next_id
    }

    /// Synthesize the record for the current id and advance.
    pub fn next_record(&mut self) -> Record {
        let profile = &self.profile;
        let rng = &mut self.rng;

        let id = self.next_id;
        self.next_id += 1;

        let gender = *self.tables.gender.sample(rng);
        let registered_at =
            timestamp::sample_between(rng, profile.registered_since, profile.generated_until);
        let age = *self.tables.age.sample(rng);
        let country = *self.tables.country.sample(rng);

        let name = names::full_name(rng, gender);
        let email = contact::email(rng, &name);
        let phone = contact::phone(rng, country);
        let address = address::postal_address(rng, country);

        let tenure_days = if rng.random_bool(profile.short_tenure_ratio) {
            rng.random_range(0..=profile.tenure_split_days)
        } else {
            rng.random_range(profile.tenure_split_days..=profile.tenure_max_days)
        };

        let friend_count = if rng.random_bool(profile.friendless_ratio) {
            0
        } else if rng.random_bool(profile.social_ratio) {
            rng.random_range(profile.friend_count_split..=profile.friend_count_max)
        } else {
            rng.random_range(0..=profile.friend_count_split)
        };

        let eligible = friend_count > profile.min_paid_friend_count
            && tenure_days > profile.min_paid_tenure_days;
        let paid_subscriber = eligible && rng.random_bool(profile.paid_conversion_ratio);

        let revenue = if paid_subscriber {
            if rng.random_bool(profile.low_revenue_ratio) {
                rng.random_range(profile.low_revenue_range.0..=profile.low_revenue_range.1)
            } else {
                rng.random_range(profile.high_revenue_range.0..=profile.high_revenue_range.1)
            }
        } else {
            0
        };

        let paid_at = (revenue > 0)
            .then(|| timestamp::sample_between(rng, registered_at, profile.generated_until));

        let games = self.tables.games(gender);
        let mut play_counts = PlayCounts::default();
        for _ in 0..tenure_days {
            play_counts.record(*games.sample(rng));
        }

        let play_events = if self.include_play_events {
            (0..tenure_days)
                .map(|_| PlayEvent {
                    game: *games.sample(rng),
                    played_at: timestamp::sample_between(
                        rng,
                        registered_at,
                        profile.play_events_until,
                    ),
                })
                .collect()
        } else {
            Vec::new()
        };

        Record {
            id,
            gender,
            age,
            country,
            registered_at,
            name,
            email,
            phone,
            address,
            friend_count,
            tenure_days,
            play_counts,
            paid_subscriber,
            revenue,
            paid_at,
            play_events,
        }
    }

    /// Lazily synthesize `count` records starting at the current id.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            synthesizer: self,
            remaining: count,
        }
    }
}

fn mix_seed(base: u64, id: u64) -> u64 {
    base.wrapping_add(id.wrapping_mul(SEED_MIX))
}

/// Iterator that lazily synthesizes records.
pub struct RecordIterator<'a> {
    synthesizer: &'a mut RecordSynthesizer,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.synthesizer.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use datagen_core::Country;

    fn test_profile() -> Profile {
        // Pin the generation window so assertions are reproducible.
        Profile {
            generated_until: Utc.with_ymd_and_hms(2013, 6, 1, 0, 0, 0).unwrap(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_ids_are_monotonic_from_start() {
        let profile = test_profile();
        let mut synth = RecordSynthesizer::new(&profile, 42).unwrap();

        let records: Vec<_> = synth.records(10).collect();
        assert_eq!(records.len(), 10);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, profile.id_start + i as u64);
        }
        assert_eq!(synth.current_id(), profile.id_start + 10);
    }

    #[test]
    fn test_play_counts_sum_to_tenure() {
        let profile = test_profile();
        let mut synth = RecordSynthesizer::new(&profile, 42).unwrap();

        for record in synth.records(500) {
            assert_eq!(record.play_counts.total(), record.tenure_days);
        }
    }

    #[test]
    fn test_revenue_implies_subscriber() {
        let profile = test_profile();
        let mut synth = RecordSynthesizer::new(&profile, 42).unwrap();

        for record in synth.records(500) {
            if record.revenue > 0 {
                assert!(record.paid_subscriber);
                assert!(record.paid_at.is_some());
            } else {
                assert!(record.paid_at.is_none());
            }
        }
    }

    #[test]
    fn test_subscriber_implies_eligibility() {
        let profile = test_profile();
        let mut synth = RecordSynthesizer::new(&profile, 42).unwrap();

        for record in synth.records(500) {
            if record.paid_subscriber {
                assert!(record.friend_count > 10);
                assert!(record.tenure_days > 20);
            }
        }
    }

    #[test]
    fn test_field_correlations() {
        let profile = test_profile();
        let mut synth = RecordSynthesizer::new(&profile, 42).unwrap();

        for record in synth.records(300) {
            assert!((18..=30).contains(&record.age));
            assert!(record.email.contains('@'));
            assert!(record.registered_at >= profile.registered_since);
            assert!(record.registered_at < profile.generated_until);
            match record.country {
                Country::Usa => {
                    assert!(!record.phone.starts_with("011-"));
                    assert_ne!(record.address, "N/A");
                }
                Country::Uk => {
                    assert!(record.phone.starts_with("011-"));
                    assert_ne!(record.address, "N/A");
                }
                _ => {
                    assert!(record.phone.starts_with("011-"));
                    assert_eq!(record.address, "N/A");
                }
            }
        }
    }

    #[test]
    fn test_play_events_only_when_requested() {
        let profile = test_profile();

        let mut flat = RecordSynthesizer::new(&profile, 42).unwrap();
        for record in flat.records(100) {
            assert!(record.play_events.is_empty());
        }

        let mut multi = RecordSynthesizer::new(&profile, 42)
            .unwrap()
            .with_play_events(true);
        for record in multi.records(100) {
            assert_eq!(record.play_events.len(), record.tenure_days as usize);
            for event in &record.play_events {
                assert!(event.played_at >= record.registered_at);
            }
        }
    }

    #[test]
    fn test_deterministic_for_fixed_seed_and_range() {
        let profile = test_profile();

        let mut a = RecordSynthesizer::new(&profile, 42).unwrap().with_start_id(7000);
        let mut b = RecordSynthesizer::new(&profile, 42).unwrap().with_start_id(7000);

        let lhs: Vec<_> = a.records(50).collect();
        let rhs: Vec<_> = b.records(50).collect();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let profile = test_profile();

        let mut a = RecordSynthesizer::new(&profile, 1).unwrap();
        let mut b = RecordSynthesizer::new(&profile, 2).unwrap();

        let lhs: Vec<_> = a.records(20).collect();
        let rhs: Vec<_> = b.records(20).collect();
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn test_empty_weight_table_is_rejected() {
        let profile = Profile {
            gender_weights: vec![],
            ..test_profile()
        };
        let result = RecordSynthesizer::new(&profile, 42);
        assert!(matches!(
            result,
            Err(SynthError::Profile(
                datagen_core::ProfileError::WeightTable {
                    name: "gender",
                    source: WeightedTableError::Empty,
                }
            ))
        ));
    }
}
