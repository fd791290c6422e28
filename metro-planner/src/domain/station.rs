//! Station name type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a station in a metro network.
///
/// Names are the only identity a station has: two stations with the same
/// name are the same station. Any string is accepted, including names with
/// spaces and mixed case ("DILARAM CHOWK", "Adwar").
///
/// `StationName` borrows as `str`, so maps keyed by it can be queried with a
/// plain `&str`.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationName;
///
/// let isbt = StationName::from("ISBT");
/// assert_eq!(isbt.as_str(), "ISBT");
/// assert_eq!(isbt, StationName::new("ISBT".to_string()));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Wrap an owned string as a station name.
    pub fn new(name: String) -> Self {
        Self(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for StationName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StationName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StationName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StationName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        /// Wrapping then unwrapping returns the original string
        #[test]
        fn roundtrip(s in ".{0,24}") {
            let name = StationName::from(s.as_str());
            prop_assert_eq!(name.as_str(), s.as_str());
        }

        /// Set membership by `&str` agrees with membership by name
        #[test]
        fn hash_consistent_with_str(s in "[A-Za-z ]{1,12}", other in "[A-Za-z ]{1,12}") {
            let mut set = HashSet::new();
            set.insert(StationName::from(s.as_str()));
            prop_assert!(set.contains(s.as_str()));
            prop_assert_eq!(set.contains(other.as_str()), s == other);
        }
    }
}
