//! Contact detail sampling: email addresses and phone numbers.

use crate::catalogs::{pick, EMAIL_DOMAINS};
use datagen_core::Country;
use rand::Rng;

/// Derive an email address from a "FIRST LAST" name: lowercased name parts,
/// a random numeric suffix, and a random mail domain.
pub fn email<R: Rng>(rng: &mut R, name: &str) -> String {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or("user");
    let last = parts.next_back().unwrap_or("");
    let suffix = rng.random_range(0..100);
    let domain = pick(rng, EMAIL_DOMAINS);
    format!(
        "{}{}{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        suffix,
        domain
    )
}

/// Domestic US phone number, "NNN-NNN-NNNN".
pub fn domestic_phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}-{}-{}",
        rng.random_range(100..1000),
        rng.random_range(100..1000),
        rng.random_range(1000..2000)
    )
}

/// International phone number with the 011 exit prefix.
pub fn international_phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "011-{}-{}-{}",
        rng.random_range(1..101),
        rng.random_range(10..110),
        rng.random_range(1000..2000)
    )
}

/// Phone number in the format matching the user's country.
pub fn phone<R: Rng>(rng: &mut R, country: Country) -> String {
    match country {
        Country::Usa => domestic_phone(rng),
        _ => international_phone(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email_derives_from_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let address = email(&mut rng, "JAMES SMITH");
        assert!(address.starts_with("jamessmith"));
        let domain = address.split('@').nth(1).unwrap();
        assert!(EMAIL_DOMAINS.contains(&domain));
    }

    #[test]
    fn test_domestic_phone_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let number = domestic_phone(&mut rng);
            let parts: Vec<&str> = number.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0].len(), 3);
            assert_eq!(parts[1].len(), 3);
            assert_eq!(parts[2].len(), 4);
        }
    }

    #[test]
    fn test_international_phone_has_exit_prefix() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(international_phone(&mut rng).starts_with("011-"));
        }
    }

    #[test]
    fn test_phone_format_follows_country() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(!phone(&mut rng, Country::Usa).starts_with("011-"));
        assert!(phone(&mut rng, Country::Germany).starts_with("011-"));
        assert!(phone(&mut rng, Country::Egypt).starts_with("011-"));
    }
}
