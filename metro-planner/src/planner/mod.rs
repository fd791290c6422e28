//! Shortest-path engines over a metro network.
//!
//! Two engines answer "how far is every station from this one?":
//!
//! - [`shortest_paths`] is exact and deterministic.
//! - [`heuristic_paths`] runs a pheromone simulation with a colony of
//!   agents, then a randomized relaxation. Its distances are never below
//!   the exact ones and differ between calls.
//!
//! Both read the network without modifying it and return a
//! [`DistanceTable`]. [`MetroPlanner`] bundles a shared network with the
//! heuristic settings for callers that build the network incrementally.

mod cancel;
mod config;
mod context;
mod error;
mod exact;
mod frontier;
mod heuristic;
mod pheromone;
mod table;
mod view;

pub use cancel::CancelToken;
pub use config::HeuristicConfig;
pub use context::MetroPlanner;
pub use error::SearchError;
pub use exact::shortest_paths;
pub use heuristic::{HeuristicEngine, heuristic_paths};
pub use table::{DistanceTable, RouteEntry};
