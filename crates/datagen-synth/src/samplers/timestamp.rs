//! Timestamp sampling.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Sample a timestamp uniformly from `[from, to)`, at second resolution.
///
/// An empty or inverted window collapses to `from`, keeping the sampler
/// total for any pair of bounds.
pub fn sample_between<R: Rng>(
    rng: &mut R,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> DateTime<Utc> {
    let from_ts = from.timestamp();
    let to_ts = to.timestamp();
    if from_ts >= to_ts {
        return from;
    }
    let ts = rng.random_range(from_ts..to_ts);
    DateTime::from_timestamp(ts, 0).unwrap_or(from)
}
