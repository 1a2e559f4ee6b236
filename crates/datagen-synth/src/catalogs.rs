//! Static attribute catalogs.
//!
//! Process-wide immutable lookup tables for names, addresses, and mail
//! domains. Pure data shared read-only across all parallel workers; the
//! sampling helpers over them live in [`crate::samplers`].

use rand::Rng;

pub const MALE_FIRST_NAMES: &[&str] = &[
    "ADAM", "ANTHONY", "ARTHUR", "BRIAN", "CHARLES", "CHRISTOPHER", "DANIEL", "DAVID", "DONALD",
    "EDGAR", "EDWARD", "EDWIN", "GEORGE", "HAROLD", "HERBERT", "HUGH", "JAMES", "JASON", "JOHN",
    "JOSEPH", "KENNETH", "KEVIN", "MARCUS", "MARK", "MATTHEW", "MICHAEL", "PAUL", "PHILIP",
    "RICHARD", "ROBERT", "ROGER", "RONALD", "SIMON", "STEVEN", "TERRY", "THOMAS", "WILLIAM",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "ALISON", "ANN", "ANNA", "ANNE", "BARBARA", "BETTY", "BERYL", "CAROL", "CHARLOTTE", "CHERYL",
    "DEBORAH", "DIANA", "DONNA", "DOROTHY", "ELIZABETH", "EVE", "FELICITY", "FIONA", "HELEN",
    "HELENA", "JENNIFER", "JESSICA", "JUDITH", "KAREN", "KIMBERLY", "LAURA", "LINDA", "LISA",
    "LUCY", "MARGARET", "MARIA", "MARY", "MICHELLE", "NANCY", "PATRICIA", "POLLY", "ROBYN",
    "RUTH", "SANDRA", "SARAH", "SHARON", "SUSAN", "TABITHA", "URSULA", "VICTORIA", "WENDY",
];

pub const SURNAMES: &[&str] = &[
    "ABEL", "ANDERSON", "ANDREWS", "ANTHONY", "BAKER", "BROWN", "BURROWS", "CLARK", "CLARKE",
    "CLARKSON", "DAVIDSON", "DAVIES", "DAVIS", "DENT", "EDWARDS", "GARCIA", "GRANT", "HALL",
    "HARRIS", "HARRISON", "JACKSON", "JEFFRIES", "JEFFERSON", "JOHNSON", "JONES", "KIRBY",
    "KIRK", "LAKE", "LEE", "LEWIS", "MARTIN", "MARTINEZ", "MAJOR", "MILLER", "MOORE", "OATES",
    "PETERS", "PETERSON", "ROBERTSON", "ROBINSON", "RODRIGUEZ", "SMITH", "SMYTHE", "STEVENS",
    "TAYLOR", "THATCHER", "THOMAS", "THOMPSON", "WALKER", "WASHINGTON", "WHITE", "WILLIAMS",
    "WILSON", "YORKE",
];

pub const STREET_NAMES: &[&str] = &[
    "Acacia", "Beech", "Birch", "Cedar", "Cherry", "Chestnut", "Elm", "Larch", "Laurel",
    "Linden", "Maple", "Oak", "Pine", "Rose", "Walnut", "Willow", "Adams", "Franklin",
    "Jackson", "Jefferson", "Lincoln", "Madison", "Washington", "Wilson", "Churchill",
    "Tyndale", "Latimer", "Cranmer", "Highland", "Hill", "Park", "Woodland", "Sunset",
    "Virginia", "1st", "2nd", "4th", "5th", "34th", "42nd",
];

pub const STREET_TYPES: &[&str] = &[
    "St", "Ave", "Rd", "Blvd", "Trl", "Rdg", "Pl", "Pkwy", "Ct", "Circle",
];

pub const UNIT_TYPES: &[&str] = &[
    "Apt", "Bsmt", "Bldg", "Dept", "Fl", "Frnt", "Hngr", "Lbby", "Lot", "Lowr", "Ofc", "Ph",
    "Pier", "Rear", "Rm", "Side", "Slip", "Spc", "Stop", "Ste", "Trlr", "Unit", "Uppr",
];

pub const US_STATES: &[&str] = &[
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

pub const UK_POST_TOWNS: &[&str] = &[
    "BM", "CB", "CV", "LE", "LI", "LS", "KT", "MK", "NE", "OX", "PL", "YO",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "yahoo.com",
    "gmail.com",
    "privacy.net",
    "webmail.com",
    "msn.com",
    "hotmail.com",
    "example.com",
];

/// Pick one entry uniformly from a non-empty catalog.
pub fn pick<'a, R: Rng>(rng: &mut R, catalog: &'a [&'a str]) -> &'a str {
    catalog[rng.random_range(0..catalog.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalogs_are_non_empty() {
        for catalog in [
            MALE_FIRST_NAMES,
            FEMALE_FIRST_NAMES,
            SURNAMES,
            STREET_NAMES,
            STREET_TYPES,
            UNIT_TYPES,
            US_STATES,
            UK_POST_TOWNS,
            EMAIL_DOMAINS,
        ] {
            assert!(!catalog.is_empty());
        }
    }

    #[test]
    fn test_pick_stays_within_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let state = pick(&mut rng, US_STATES);
            assert!(US_STATES.contains(&state));
        }
    }
}
