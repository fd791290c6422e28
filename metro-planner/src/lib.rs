//! Metro network shortest-path planner.
//!
//! Answers: "from this station, how far is every other station?" over a
//! metro map of stations joined by weighted, two-way connections. Distances
//! come from either an exact engine or a pheromone-guided heuristic.

pub mod domain;
pub mod network;
pub mod planner;
