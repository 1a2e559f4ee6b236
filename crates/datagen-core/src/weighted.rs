//! Discrete weighted random selection.

use rand::Rng;

/// Error type for weighted table construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WeightedTableError {
    /// The entry list was empty.
    #[error("weight table is empty")]
    Empty,

    /// Every entry had weight zero.
    #[error("weight table total is zero")]
    ZeroTotal,
}

/// A discrete distribution over an ordered list of `(item, weight)` pairs.
///
/// Selection probability is `weight / total_weight`; weights are arbitrary
/// positive integers and need not sum to 100. The entry order is preserved
/// from construction, which together with a seeded RNG makes sampling fully
/// reproducible.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, u32)>,
    total: u32,
}

impl<T> WeightedTable<T> {
    /// Build a table from `(item, weight)` pairs.
    ///
    /// Fails if the list is empty or all weights are zero. Individual
    /// zero-weight entries are allowed and effectively never selected.
    pub fn new(entries: Vec<(T, u32)>) -> Result<Self, WeightedTableError> {
        if entries.is_empty() {
            return Err(WeightedTableError::Empty);
        }
        let total = entries.iter().map(|(_, w)| w).sum();
        if total == 0 {
            return Err(WeightedTableError::ZeroTotal);
        }
        Ok(Self { entries, total })
    }

    /// Pick one item, proportionally to its weight.
    ///
    /// Draws a target uniformly from `[0, total)` and walks the entries in
    /// order, subtracting each weight from the remaining target. Total over
    /// any table the constructor accepts: if the walk runs off the end, the
    /// last item is returned.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &T {
        let mut target = rng.random_range(0..self.total);
        let (last, head) = self
            .entries
            .split_last()
            .expect("constructor guarantees at least one entry");
        for (item, weight) in head {
            if target <= *weight {
                return item;
            }
            target -= weight;
        }
        &last.0
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        self.total
    }

    /// The entries in selection order.
    pub fn entries(&self) -> &[(T, u32)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_empty_table_rejected() {
        let result = WeightedTable::<&str>::new(vec![]);
        assert_eq!(result.unwrap_err(), WeightedTableError::Empty);
    }

    #[test]
    fn test_zero_total_rejected() {
        let result = WeightedTable::new(vec![("a", 0), ("b", 0)]);
        assert_eq!(result.unwrap_err(), WeightedTableError::ZeroTotal);
    }

    #[test]
    fn test_single_entry_always_selected() {
        let table = WeightedTable::new(vec![("only", 7)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(*table.sample(&mut rng), "only");
        }
    }

    #[test]
    fn test_never_returns_foreign_item() {
        let table = WeightedTable::new(vec![("a", 3), ("b", 5), ("c", 11)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let item = *table.sample(&mut rng);
            assert!(["a", "b", "c"].contains(&item));
        }
    }

    #[test]
    fn test_weights_need_not_sum_to_100() {
        // black 51 / white 17 marbles
        let table = WeightedTable::new(vec![("black", 51), ("white", 17)]).unwrap();
        assert_eq!(table.total_weight(), 68);

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..50_000 {
            *counts.entry(*table.sample(&mut rng)).or_default() += 1;
        }
        let black_share = f64::from(counts["black"]) / 50_000.0;
        assert!((black_share - 51.0 / 68.0).abs() < 0.02);
    }

    #[test]
    fn test_approximates_configured_proportions() {
        let table = WeightedTable::new(vec![("male", 30), ("female", 70)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let draws = 100_000;
        let mut male = 0u32;
        for _ in 0..draws {
            if *table.sample(&mut rng) == "male" {
                male += 1;
            }
        }
        let share = f64::from(male) / f64::from(draws);
        assert!((share - 0.30).abs() < 0.02, "male share was {share}");
    }

    #[test]
    fn test_deterministic_with_fixed_seed() {
        let table = WeightedTable::new(vec![("a", 1), ("b", 2), ("c", 3)]).unwrap();

        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            assert_eq!(table.sample(&mut rng1), table.sample(&mut rng2));
        }
    }
}
