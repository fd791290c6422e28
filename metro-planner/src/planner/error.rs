//! Path search error types.

use crate::domain::NetworkError;

/// Error from a heuristic path search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The network rejected the query (unknown source station)
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Heuristic parameters are unusable
    #[error("invalid heuristic configuration: {0}")]
    InvalidConfig(String),

    /// The search was cancelled through its token
    #[error("search cancelled")]
    Cancelled,
}
