//! Edge weights and path distances.
//!
//! Weights are stored in whatever unit the caller chooses. The stock metro
//! map uses tenths of a kilometre: a user typing "3" (km) is stored as a
//! weight of 30, and a distance of 30 is shown as "3.0 KM". That scaling is a
//! presentation concern; [`Weight::from_km`] and [`Distance::as_km`] exist for
//! callers that follow the same convention, and nothing else in the crate
//! depends on it.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NetworkError;

/// Scale between stored units and kilometres in the stock metro map.
pub const UNITS_PER_KM: u32 = 10;

/// A non-negative edge weight.
///
/// `Weight` is unsigned, so a negative weight can never reach a path engine.
/// Signed and textual input goes through [`TryFrom<i64>`] or [`FromStr`],
/// both of which reject negative values with [`NetworkError::InvalidWeight`].
///
/// # Examples
///
/// ```
/// use metro_planner::domain::Weight;
///
/// let w: Weight = "25".parse().unwrap();
/// assert_eq!(w.get(), 25);
///
/// assert!("-3".parse::<Weight>().is_err());
/// assert!("two".parse::<Weight>().is_err());
/// assert!(Weight::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert whole kilometres to stored units (km × 10).
    ///
    /// Fails if the scaled value does not fit in a weight.
    pub fn from_km(km: u32) -> Result<Self, NetworkError> {
        km.checked_mul(UNITS_PER_KM)
            .map(Self)
            .ok_or_else(|| NetworkError::InvalidWeight {
                value: km.to_string(),
                reason: "too large once scaled to tenths of a km",
            })
    }
}

impl TryFrom<i64> for Weight {
    type Error = NetworkError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(NetworkError::InvalidWeight {
                value: value.to_string(),
                reason: "must not be negative",
            });
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| NetworkError::InvalidWeight {
                value: value.to_string(),
                reason: "out of range",
            })
    }
}

impl FromStr for Weight {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| NetworkError::InvalidWeight {
            value: s.to_string(),
            reason: "not a whole number",
        })?;
        Self::try_from(value)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A path distance from a query's source, or [`Distance::UNREACHED`].
///
/// `UNREACHED` orders above every finite distance, so it behaves as an
/// effectively infinite upper bound in comparisons. Adding to a distance
/// saturates at `UNREACHED` rather than wrapping.
///
/// Serializes as a number, or `null` when unreached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);

    /// No path from the source has been found.
    pub const UNREACHED: Distance = Distance(u64::MAX);

    /// A finite distance. `u64::MAX` is reserved for `UNREACHED`.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn is_reached(self) -> bool {
        self != Self::UNREACHED
    }

    /// The distance, or `None` if unreached.
    pub fn get(self) -> Option<u64> {
        self.is_reached().then_some(self.0)
    }

    pub fn saturating_add(self, amount: u64) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Distance in kilometres for stored units of tenths of a km.
    pub fn as_km(self) -> Option<f64> {
        self.get().map(|d| d as f64 / f64::from(UNITS_PER_KM))
    }
}

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, weight: Weight) -> Distance {
        self.saturating_add(u64::from(weight.get()))
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::UNREACHED, Self)
    }
}

impl From<Distance> for Option<u64> {
    fn from(distance: Distance) -> Self {
        distance.get()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(d) => write!(f, "{}", d),
            None => f.write_str("unreached"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every non-negative i64 that fits in u32 is accepted as-is
        #[test]
        fn in_range_accepted(v in 0i64..=i64::from(u32::MAX)) {
            let w = Weight::try_from(v).unwrap();
            prop_assert_eq!(i64::from(w.get()), v);
        }

        /// Every negative value is rejected, whether typed or parsed
        #[test]
        fn negative_rejected(v in i64::MIN..0) {
            prop_assert!(Weight::try_from(v).is_err());
            prop_assert!(v.to_string().parse::<Weight>().is_err());
        }

        /// Adding a weight never produces a smaller distance
        #[test]
        fn add_is_monotone(d in 0u64..u64::MAX, w in any::<u32>()) {
            let sum = Distance::new(d) + Weight::new(w);
            prop_assert!(sum >= Distance::new(d));
        }
    }
}
