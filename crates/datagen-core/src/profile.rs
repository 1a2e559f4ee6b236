//! Generation profile: the immutable configuration object.
//!
//! A [`Profile`] holds every sampling weight, ratio, and bound the
//! synthesizer needs. It is constructed once (defaults mirror the classic
//! analytics mock-data distributions), optionally overridden from a YAML
//! file, validated up front, and then passed by reference into the
//! synthesizer, partitioner, and writers. No global mutable state.

use crate::record::{Country, Game, Gender};
use crate::weighted::{WeightedTable, WeightedTableError};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for profile loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Error reading the profile file
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("failed to parse profile YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A weight table was empty or summed to zero
    #[error("invalid {name} weight table: {source}")]
    WeightTable {
        name: &'static str,
        source: WeightedTableError,
    },

    /// A probability field fell outside [0, 1]
    #[error("{name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },

    /// A min/max pair was inverted
    #[error("{name} range is inverted: {min}..{max}")]
    InvertedRange { name: &'static str, min: u32, max: u32 },

    /// The registration window was empty
    #[error("registered_since must precede generated_until")]
    EmptyRegistrationWindow,
}

/// Immutable generation configuration.
///
/// All fields have defaults, so a partial YAML profile only overrides what
/// it names. `generated_until` defaults to the current instant captured at
/// construction; together with a seed it fully determines the generated
/// byte stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// First customer id assigned to the run.
    pub id_start: u64,

    /// Gender distribution.
    pub gender_weights: Vec<(Gender, u32)>,

    /// Age distribution over [18, 30].
    pub age_weights: Vec<(u8, u32)>,

    /// Country distribution.
    pub country_weights: Vec<(Country, u32)>,

    /// Game preference distribution for male users.
    pub male_game_weights: Vec<(Game, u32)>,

    /// Game preference distribution for female users.
    pub female_game_weights: Vec<(Game, u32)>,

    /// Share of users with no friends at all.
    pub friendless_ratio: f64,

    /// Among users with friends, share landing in the high band.
    pub social_ratio: f64,

    /// Boundary between the low and high friend-count bands.
    pub friend_count_split: u32,

    /// Upper bound of the high friend-count band.
    pub friend_count_max: u32,

    /// Share of users with a short tenure.
    pub short_tenure_ratio: f64,

    /// Boundary between short and long tenure, in days.
    pub tenure_split_days: u32,

    /// Maximum tenure, in days.
    pub tenure_max_days: u32,

    /// Minimum friend count for paid-subscription eligibility (exclusive).
    pub min_paid_friend_count: u32,

    /// Minimum tenure for paid-subscription eligibility (exclusive).
    pub min_paid_tenure_days: u32,

    /// Conversion probability for eligible users.
    pub paid_conversion_ratio: f64,

    /// Share of paying users in the low revenue band.
    pub low_revenue_ratio: f64,

    /// Low revenue band, inclusive USD bounds.
    pub low_revenue_range: (u32, u32),

    /// High revenue band, inclusive USD bounds.
    pub high_revenue_range: (u32, u32),

    /// Earliest possible registration instant.
    pub registered_since: DateTime<Utc>,

    /// Upper bound for registration and payment instants.
    pub generated_until: DateTime<Utc>,

    /// Upper bound for game-play event instants (multi-table shape).
    pub play_events_until: DateTime<Utc>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id_start: 1000,
            gender_weights: vec![(Gender::Male, 30), (Gender::Female, 70)],
            age_weights: vec![
                (18, 15),
                (19, 12),
                (20, 12),
                (21, 11),
                (22, 11),
                (23, 9),
                (24, 7),
                (25, 6),
                (26, 5),
                (27, 4),
                (28, 3),
                (29, 2),
                (30, 2),
            ],
            country_weights: vec![
                (Country::Usa, 60),
                (Country::Uk, 25),
                (Country::Canada, 5),
                (Country::Mexico, 5),
                (Country::Germany, 10),
                (Country::France, 10),
                (Country::Egypt, 5),
            ],
            male_game_weights: vec![
                (Game::Sniper, 70),
                (Game::Scramble, 20),
                (Game::Pictionary, 10),
                (Game::City, 10),
            ],
            female_game_weights: vec![
                (Game::City, 50),
                (Game::Pictionary, 30),
                (Game::Scramble, 15),
                (Game::Sniper, 5),
            ],
            friendless_ratio: 0.3,
            social_ratio: 0.4,
            friend_count_split: 5,
            friend_count_max: 100,
            short_tenure_ratio: 0.6,
            tenure_split_days: 10,
            tenure_max_days: 100,
            min_paid_friend_count: 10,
            min_paid_tenure_days: 20,
            paid_conversion_ratio: 0.6,
            low_revenue_ratio: 0.8,
            low_revenue_range: (5, 30),
            high_revenue_range: (30, 99),
            registered_since: Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap(),
            generated_until: Utc::now(),
            play_events_until: Utc.with_ymd_and_hms(2012, 12, 31, 0, 0, 0).unwrap(),
        }
    }
}

impl Profile {
    /// Parse a profile from YAML and validate it.
    ///
    /// Fields absent from the YAML keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let profile: Profile = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check every weight table, ratio, and bound.
    ///
    /// Configuration errors are fatal before any generation starts, so this
    /// is called once up front rather than per sample.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_table("gender", &self.gender_weights)?;
        check_table("age", &self.age_weights)?;
        check_table("country", &self.country_weights)?;
        check_table("male_game", &self.male_game_weights)?;
        check_table("female_game", &self.female_game_weights)?;

        check_ratio("friendless_ratio", self.friendless_ratio)?;
        check_ratio("social_ratio", self.social_ratio)?;
        check_ratio("short_tenure_ratio", self.short_tenure_ratio)?;
        check_ratio("paid_conversion_ratio", self.paid_conversion_ratio)?;
        check_ratio("low_revenue_ratio", self.low_revenue_ratio)?;

        check_range("friend_count", self.friend_count_split, self.friend_count_max)?;
        check_range("tenure_days", self.tenure_split_days, self.tenure_max_days)?;
        check_range("low_revenue", self.low_revenue_range.0, self.low_revenue_range.1)?;
        check_range(
            "high_revenue",
            self.high_revenue_range.0,
            self.high_revenue_range.1,
        )?;

        if self.registered_since >= self.generated_until {
            return Err(ProfileError::EmptyRegistrationWindow);
        }
        Ok(())
    }
}

fn check_table<T: Clone>(
    name: &'static str,
    entries: &[(T, u32)],
) -> Result<(), ProfileError> {
    WeightedTable::new(entries.to_vec())
        .map(|_| ())
        .map_err(|source| ProfileError::WeightTable { name, source })
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), ProfileError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ProfileError::RatioOutOfRange { name, value });
    }
    Ok(())
}

fn check_range(name: &'static str, min: u32, max: u32) -> Result<(), ProfileError> {
    if min > max {
        return Err(ProfileError::InvertedRange { name, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        Profile::default().validate().unwrap();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let profile = Profile::from_yaml(
            r#"
id_start: 5000
gender_weights:
  - [male, 50]
  - [female, 50]
"#,
        )
        .unwrap();

        assert_eq!(profile.id_start, 5000);
        assert_eq!(profile.gender_weights, vec![(Gender::Male, 50), (Gender::Female, 50)]);
        // Untouched fields keep their defaults
        assert_eq!(profile.friend_count_max, 100);
        assert_eq!(profile.country_weights.len(), 7);
    }

    #[test]
    fn test_empty_weight_table_rejected() {
        let result = Profile::from_yaml("age_weights: []");
        assert!(matches!(
            result,
            Err(ProfileError::WeightTable { name: "age", .. })
        ));
    }

    #[test]
    fn test_zero_weight_table_rejected() {
        let result = Profile::from_yaml(
            r#"
country_weights:
  - [USA, 0]
  - [UK, 0]
"#,
        );
        assert!(matches!(
            result,
            Err(ProfileError::WeightTable {
                name: "country",
                source: WeightedTableError::ZeroTotal,
            })
        ));
    }

    #[test]
    fn test_bad_ratio_rejected() {
        let result = Profile::from_yaml("paid_conversion_ratio: 1.5");
        assert!(matches!(
            result,
            Err(ProfileError::RatioOutOfRange {
                name: "paid_conversion_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_inverted_revenue_range_rejected() {
        let result = Profile::from_yaml("low_revenue_range: [30, 5]");
        assert!(matches!(
            result,
            Err(ProfileError::InvertedRange {
                name: "low_revenue",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_registration_window_rejected() {
        let result = Profile::from_yaml(
            r#"
registered_since: "2024-01-01T00:00:00Z"
generated_until: "2023-01-01T00:00:00Z"
"#,
        );
        assert!(matches!(result, Err(ProfileError::EmptyRegistrationWindow)));
    }
}
