//! Name sampling.

use crate::catalogs::{pick, FEMALE_FIRST_NAMES, MALE_FIRST_NAMES, SURNAMES};
use datagen_core::Gender;
use rand::Rng;

/// Sample a "FIRST LAST" name matching the given gender.
pub fn full_name<R: Rng>(rng: &mut R, gender: Gender) -> String {
    let first = match gender {
        Gender::Male => pick(rng, MALE_FIRST_NAMES),
        Gender::Female => pick(rng, FEMALE_FIRST_NAMES),
    };
    let last = pick(rng, SURNAMES);
    format!("{first} {last}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name_matches_gender_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let name = full_name(&mut rng, Gender::Male);
            let (first, last) = name.split_once(' ').unwrap();
            assert!(MALE_FIRST_NAMES.contains(&first));
            assert!(SURNAMES.contains(&last));
        }
    }

    #[test]
    fn test_female_names_use_female_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let name = full_name(&mut rng, Gender::Female);
            let (first, _) = name.split_once(' ').unwrap();
            assert!(FEMALE_FIRST_NAMES.contains(&first));
        }
    }
}
