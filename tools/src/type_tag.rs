//! `@TYPE(...)` annotations in producer names.
//!
//! Scene authors tag a particle system or collection name with
//! `@TYPE(1, 2, 3)` to say which instance types it scatters. Each placement
//! from that source gets one value, picked uniformly at random when the tag
//! lists more than one.

use codec::DEFAULT_TYPE;
use rand::seq::IndexedRandom;
use rand::Rng;

const TAG_OPEN: &str = "@TYPE(";

/// A parsed `@TYPE(...)` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTag {
    values: Vec<u8>,
}

impl TypeTag {
    /// Finds the first well-formed tag in `name`.
    ///
    /// The body may contain only digits, commas, and whitespace, every entry
    /// must fit in a `u8`, and at least one entry is required. Malformed tags
    /// are skipped in favour of a later well-formed one.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        name.match_indices(TAG_OPEN).find_map(|(start, _)| {
            let rest = &name[start + TAG_OPEN.len()..];
            let body = &rest[..rest.find(')')?];
            parse_body(body).map(|values| Self { values })
        })
    }

    /// The listed type values, in tag order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Picks the type for one placement.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        match self.values.as_slice() {
            [single] => *single,
            values => values.choose(rng).copied().unwrap_or(DEFAULT_TYPE),
        }
    }
}

/// Resolves the type for one placement from a source name, `0` if untagged.
pub fn resolve_type_id<R: Rng + ?Sized>(name: &str, rng: &mut R) -> u8 {
    TypeTag::parse(name).map_or(DEFAULT_TYPE, |tag| tag.resolve(rng))
}

fn parse_body(body: &str) -> Option<Vec<u8>> {
    if body.trim().is_empty()
        || !body
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c.is_whitespace())
    {
        return None;
    }
    body.split(',')
        .map(|entry| entry.trim().parse::<u8>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parse_single_value() {
        let tag = TypeTag::parse("Grass @TYPE(3)").unwrap();
        assert_eq!(tag.values(), &[3]);
    }

    #[test]
    fn parse_list_with_whitespace() {
        let tag = TypeTag::parse("Flowers@TYPE( 1, 2 ,7 )_lod0").unwrap();
        assert_eq!(tag.values(), &[1, 2, 7]);
    }

    #[test]
    fn parse_absent_tag() {
        assert_eq!(TypeTag::parse("ParticleSystem"), None);
        assert_eq!(TypeTag::parse("@TYPE"), None);
        assert_eq!(TypeTag::parse("@TYPE(1"), None);
    }

    #[test]
    fn parse_rejects_bad_bodies() {
        assert_eq!(TypeTag::parse("@TYPE()"), None);
        assert_eq!(TypeTag::parse("@TYPE( )"), None);
        assert_eq!(TypeTag::parse("@TYPE(a)"), None);
        assert_eq!(TypeTag::parse("@TYPE(1,,2)"), None);
        assert_eq!(TypeTag::parse("@TYPE(-1)"), None);
        assert_eq!(TypeTag::parse("@TYPE(256)"), None);
    }

    #[test]
    fn parse_skips_to_later_valid_tag() {
        let tag = TypeTag::parse("@TYPE(x) then @TYPE(4,5)").unwrap();
        assert_eq!(tag.values(), &[4, 5]);
    }

    #[test]
    fn resolve_single_value_is_fixed() {
        let mut rng = StdRng::seed_from_u64(7);
        let tag = TypeTag::parse("@TYPE(9)").unwrap();
        for _ in 0..16 {
            assert_eq!(tag.resolve(&mut rng), 9);
        }
    }

    #[test]
    fn resolve_list_picks_listed_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let tag = TypeTag::parse("@TYPE(1, 2, 3)").unwrap();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let value = tag.resolve(&mut rng);
            assert!((1..=3).contains(&value));
            seen[value as usize] = true;
        }
        assert!(seen[1] && seen[2] && seen[3], "all values should appear");
    }

    #[test]
    fn resolve_is_reproducible_with_seed() {
        let tag = TypeTag::parse("@TYPE(1, 2, 3, 4)").unwrap();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..32).map(|_| tag.resolve(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(picks(11), picks(11));
    }

    #[test]
    fn resolve_type_id_defaults_to_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(resolve_type_id("Rocks", &mut rng), 0);
        assert_eq!(resolve_type_id("Rocks @TYPE(12)", &mut rng), 12);
    }
}
