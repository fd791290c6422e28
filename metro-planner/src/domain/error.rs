//! Network error types.
//!
//! These errors represent references to stations that do not exist and
//! malformed edge weights. They are reported at the point of the offending
//! call and never leave the network partially modified.

use super::StationName;

/// Errors from building or querying a metro network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A station name that is not registered in the network
    #[error("station not found: {0}")]
    StationNotFound(StationName),

    /// A weight that is negative, out of range, or not a number
    #[error("invalid weight {value}: {reason}")]
    InvalidWeight { value: String, reason: &'static str },
}

impl NetworkError {
    pub(crate) fn station_not_found(name: &str) -> Self {
        Self::StationNotFound(StationName::from(name))
    }
}
