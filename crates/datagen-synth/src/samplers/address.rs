//! Postal address sampling.
//!
//! Structured addresses exist for USA and UK only; every other country
//! renders as "N/A".

use crate::catalogs::{pick, STREET_NAMES, STREET_TYPES, UK_POST_TOWNS, UNIT_TYPES, US_STATES};
use datagen_core::Country;
use rand::Rng;

/// Street address line, e.g. "1742 Maple Ave".
pub fn street_line<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.random_range(0..4000),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_TYPES)
    )
}

/// Secondary unit line, e.g. "Apt 42".
pub fn unit_line<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, UNIT_TYPES), rng.random_range(0..999))
}

/// Five-digit zero-padded US zip code.
pub fn zipcode<R: Rng>(rng: &mut R) -> String {
    format!("{:05}", rng.random_range(0..99999))
}

/// Two-letter US state code.
pub fn us_state<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, US_STATES)
}

/// UK post code, e.g. "CB4 2QX".
pub fn uk_post_code<R: Rng>(rng: &mut R) -> String {
    let town = pick(rng, UK_POST_TOWNS);
    let num1 = rng.random_range(0..100);
    let num2 = rng.random_range(0..100);
    let letters: String = (0..2)
        .map(|_| char::from(b'A' + rng.random_range(0..26u8)))
        .collect();
    format!("{town}{num1} {num2}{letters}")
}

/// Full postal address for the given country.
pub fn postal_address<R: Rng>(rng: &mut R, country: Country) -> String {
    match country {
        Country::Usa => format!(
            "{} {} {} {}",
            street_line(rng),
            unit_line(rng),
            us_state(rng),
            zipcode(rng)
        ),
        Country::Uk => format!("{} {} {}", street_line(rng), unit_line(rng), uk_post_code(rng)),
        _ => "N/A".to_string(),
    }
}
