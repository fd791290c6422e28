//! Domain types for the metro planner.
//!
//! Stations, edge weights and path distances. Weights are unsigned by
//! construction, so code that receives a `Weight` never has to re-check
//! for negative values.

mod distance;
mod error;
mod station;

pub use distance::{Distance, UNITS_PER_KM, Weight};
pub use error::NetworkError;
pub use station::StationName;
