//! The synthetic entity model.
//!
//! A [`Record`] is constructed by the synthesizer, serialized by a writer,
//! and discarded; it is never mutated after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a synthetic user; drives name and game-preference sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country of a synthetic user; drives phone and address formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Usa,
    Uk,
    Canada,
    Mexico,
    Germany,
    France,
    Egypt,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Canada => "CANADA",
            Country::Mexico => "MEXICO",
            Country::Germany => "GERMANY",
            Country::France => "FRANCE",
            Country::Egypt => "EGYPT",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four games a synthetic user can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    City,
    Pictionary,
    Scramble,
    Sniper,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::City => "city",
            Game::Pictionary => "pictionary",
            Game::Scramble => "scramble",
            Game::Sniper => "sniper",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-game play counters for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayCounts {
    pub city: u32,
    pub pictionary: u32,
    pub scramble: u32,
    pub sniper: u32,
}

impl PlayCounts {
    /// Increment the counter for the given game.
    pub fn record(&mut self, game: Game) {
        match game {
            Game::City => self.city += 1,
            Game::Pictionary => self.pictionary += 1,
            Game::Scramble => self.scramble += 1,
            Game::Sniper => self.sniper += 1,
        }
    }

    /// Total plays across all games. Equals the user's tenure in days.
    pub fn total(&self) -> u32 {
        self.city + self.pictionary + self.scramble + self.sniper
    }
}

/// One game-play event (multi-table fact row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayEvent {
    pub game: Game,
    pub played_at: DateTime<Utc>,
}

/// One fully formed synthetic user/activity entity.
///
/// Invariants maintained by the synthesizer:
/// - `play_counts.total() == tenure_days`
/// - `revenue > 0` implies `paid_subscriber`
/// - `paid_subscriber` implies `friend_count > 10 && tenure_days > 20`
/// - `paid_at.is_some()` iff `revenue > 0`
/// - `play_events` is empty unless the multi-table shape was requested, in
///   which case it holds exactly `tenure_days` events
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u64,
    pub gender: Gender,
    pub age: u8,
    pub country: Country,
    pub registered_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub friend_count: u32,
    pub tenure_days: u32,
    pub play_counts: PlayCounts,
    pub paid_subscriber: bool,
    pub revenue: u32,
    pub paid_at: Option<DateTime<Utc>>,
    pub play_events: Vec<PlayEvent>,
}
