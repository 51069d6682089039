use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// A resting position of the drawer.
///
/// The value is the ratio of drawer coverage to the available space, so
/// [`Detent::MEDIUM`] rests with the drawer covering half of its container.
/// Construction is the only place the ratio is clamped into `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Display, Into, Serialize, Deserialize)]
#[display("{value}")]
#[serde(from = "f64", into = "f64")]
pub struct Detent {
    value: f64,
}

impl Detent {
    pub const HIDDEN: Self = Self { value: 0.0 };
    pub const SMALL: Self = Self { value: 0.05 };
    pub const MEDIUM: Self = Self { value: 0.5 };
    pub const LARGE: Self = Self { value: 1.0 };

    /// Every ratio a detent can take.
    pub const ALL: RangeInclusive<f64> = Self::HIDDEN.value..=Self::LARGE.value;

    pub fn new(ratio: f64) -> Self {
        // NaN has no place on the ratio line; it rests hidden.
        let value = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(*Self::ALL.start(), *Self::ALL.end())
        };
        // -0.0 would compare equal to 0.0 but hash differently.
        Self { value: value + 0.0 }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Default for Detent {
    fn default() -> Self {
        Self::SMALL
    }
}

impl From<f64> for Detent {
    fn from(ratio: f64) -> Self {
        Self::new(ratio)
    }
}

impl PartialEq for Detent {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Detent {}

impl Hash for Detent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl PartialOrd for Detent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Detent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_construction_clamps() {
        let cases = vec![
            (-3.0, 0.0),
            (-0.0, 0.0),
            (0.0, 0.0),
            (0.61, 0.61),
            (1.0, 1.0),
            (1.7, 1.0),
            (f64::INFINITY, 1.0),
            (f64::NEG_INFINITY, 0.0),
            (f64::NAN, 0.0),
        ];

        for (raw, expected) in cases {
            assert_eq!(Detent::new(raw).value(), expected, "raw ratio {raw}");
        }
    }

    #[test]
    fn test_named_detents() {
        assert_eq!(Detent::HIDDEN.value(), 0.0);
        assert_eq!(Detent::SMALL.value(), 0.05);
        assert_eq!(Detent::MEDIUM.value(), 0.5);
        assert_eq!(Detent::LARGE.value(), 1.0);
        assert_eq!(Detent::new(0.5), Detent::MEDIUM);
    }

    #[test]
    fn test_ordering_is_by_value() {
        let mut detents = vec![Detent::LARGE, Detent::SMALL, Detent::new(0.61), Detent::HIDDEN];
        detents.sort();
        assert_eq!(
            detents,
            vec![Detent::HIDDEN, Detent::SMALL, Detent::new(0.61), Detent::LARGE]
        );
        assert!(Detent::SMALL < Detent::MEDIUM);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let set: HashSet<Detent> = [Detent::new(-0.0), Detent::HIDDEN, Detent::new(2.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Detent::HIDDEN));
        assert!(set.contains(&Detent::LARGE));
    }

    #[test]
    fn test_serde_clamps_on_the_way_in() {
        let detents: Vec<Detent> = serde_json::from_str("[0.05, 1.5, -1]").unwrap();
        assert_eq!(detents, vec![Detent::SMALL, Detent::LARGE, Detent::HIDDEN]);
        assert_eq!(serde_json::to_string(&Detent::MEDIUM).unwrap(), "0.5");
    }
}
