//! Dense, index-addressed snapshot of a network for path engines.

use crate::domain::{Distance, NetworkError, StationName, Weight};
use crate::network::MetroNetwork;

/// Read-only view of a [`MetroNetwork`] with stations replaced by their
/// position in station order.
///
/// Built once per query so the engines work on `usize` indices instead of
/// hashing names on every relaxation.
pub(crate) struct NetworkView<'a> {
    network: &'a MetroNetwork,
    names: Vec<&'a StationName>,
    edges: Vec<Vec<(usize, Weight)>>,
}

impl<'a> NetworkView<'a> {
    pub fn new(network: &'a MetroNetwork) -> Self {
        let mut names = Vec::with_capacity(network.len());
        let mut edges = Vec::with_capacity(network.len());

        for (name, connections) in network.iter() {
            names.push(name);
            edges.push(
                connections
                    .iter()
                    .filter_map(|c| {
                        network
                            .index_of(c.station.as_str())
                            .map(|idx| (idx, c.weight))
                    })
                    .collect(),
            );
        }

        Self {
            network,
            names,
            edges,
        }
    }

    /// Index of a station, or `StationNotFound`.
    pub fn resolve(&self, station: &str) -> Result<usize, NetworkError> {
        self.network
            .index_of(station)
            .ok_or_else(|| NetworkError::station_not_found(station))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, index: usize) -> &'a StationName {
        self.names[index]
    }

    pub fn names(&self) -> &[&'a StationName] {
        &self.names
    }

    /// Outgoing (neighbour, weight) pairs, in adjacency order.
    pub fn edges(&self, index: usize) -> &[(usize, Weight)] {
        &self.edges[index]
    }

    /// Weight of the first edge from `from` to `to` as a distance, or
    /// `UNREACHED` if they are not directly connected.
    pub fn step_distance(&self, from: usize, to: usize) -> Distance {
        self.edges[from]
            .iter()
            .find(|(next, _)| *next == to)
            .map_or(Distance::UNREACHED, |(_, w)| Distance::ZERO + *w)
    }
}
