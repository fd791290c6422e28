//! Metro network topology.
//!
//! Stations joined by weighted connections. Connections are symmetric: adding
//! A–B with weight w records B in A's adjacency and A in B's adjacency, both
//! with weight w. This module is the only place the topology is mutated; the
//! path engines in [`crate::planner`] only read it.

mod stock;

pub use stock::dehradun_network;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{NetworkError, StationName, Weight};

/// One entry in a station's adjacency: a neighbour and the edge weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub station: StationName,
    pub weight: Weight,
}

impl Connection {
    pub fn new(station: impl Into<StationName>, weight: Weight) -> Self {
        Self {
            station: station.into(),
            weight,
        }
    }
}

/// A metro network: stations and their bidirectional weighted connections.
///
/// Stations keep their insertion order. Each station's adjacency keeps the
/// order connections were added in, and the same connection added twice is
/// stored twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetroNetwork {
    adjacency: IndexMap<StationName, Vec<Connection>>,
}

impl MetroNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with no connections.
    ///
    /// Re-adding an existing station clears its own adjacency (it keeps its
    /// position in station order). Connections recorded on *other* stations
    /// that point at it are left in place.
    pub fn add_station(&mut self, name: impl Into<StationName>) {
        let name = name.into();
        trace!(station = %name, "adding station");
        self.adjacency.insert(name, Vec::new());
    }

    /// Connect two existing stations with a weight given as a signed integer.
    ///
    /// Fails with [`NetworkError::StationNotFound`] if either station is
    /// missing, or [`NetworkError::InvalidWeight`] if the weight is negative
    /// or too large. On failure the network is unchanged.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> Result<(), NetworkError> {
        let weight = Weight::try_from(weight)?;
        self.add_connection(a, b, weight)
    }

    /// Connect two existing stations.
    ///
    /// Both stations are checked before either adjacency is touched, so the
    /// pair of entries is inserted together or not at all. Connecting a
    /// station to itself records two entries on that station.
    pub fn add_connection(&mut self, a: &str, b: &str, weight: Weight) -> Result<(), NetworkError> {
        let (a_idx, a_name, _) = self
            .adjacency
            .get_full(a)
            .ok_or_else(|| NetworkError::station_not_found(a))?;
        let (b_idx, b_name, _) = self
            .adjacency
            .get_full(b)
            .ok_or_else(|| NetworkError::station_not_found(b))?;
        let (a_name, b_name) = (a_name.clone(), b_name.clone());

        trace!(from = %a_name, to = %b_name, weight = weight.get(), "adding connection");

        self.adjacency[a_idx].push(Connection::new(b_name, weight));
        self.adjacency[b_idx].push(Connection::new(a_name, weight));
        Ok(())
    }

    /// The connections of a station, in the order they were added.
    pub fn neighbors(&self, station: &str) -> Result<&[Connection], NetworkError> {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .ok_or_else(|| NetworkError::station_not_found(station))
    }

    /// Weight of the first connection from `a` to `b`, if they are directly
    /// connected.
    pub fn weight_between(&self, a: &str, b: &str) -> Option<Weight> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|c| c.station == b)
            .map(|c| c.weight)
    }

    /// All registered station names, in insertion order.
    pub fn station_names(&self) -> impl Iterator<Item = &StationName> + '_ {
        self.adjacency.keys()
    }

    /// Iterate stations with their connections, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&StationName, &[Connection])> + '_ {
        self.adjacency.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Check if a station is registered.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected connections (A–B counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Remove every station and connection.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Position of a station in insertion order.
    pub(crate) fn index_of(&self, station: &str) -> Option<usize> {
        self.adjacency.get_index_of(station)
    }
}

/// Builder for creating metro networks.
///
/// Provides a fluent API for adding stations and connections. Connection
/// errors are held until [`MetroNetworkBuilder::build`], which reports the
/// first one.
///
/// # Example
///
/// ```
/// use metro_planner::network::MetroNetworkBuilder;
///
/// let network = MetroNetworkBuilder::new()
///     .stations(["P", "Q", "R"])
///     .connection("P", "Q", 10)
///     .connection("Q", "R", 20)
///     .build()
///     .unwrap();
///
/// assert_eq!(network.len(), 3);
/// assert_eq!(network.edge_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MetroNetworkBuilder {
    inner: MetroNetwork,
    error: Option<NetworkError>,
}

impl MetroNetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, name: &str) -> Self {
        self.inner.add_station(name);
        self
    }

    /// Add several stations.
    pub fn stations<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            self.inner.add_station(name);
        }
        self
    }

    /// Add a connection between two stations already added to the builder.
    pub fn connection(mut self, a: &str, b: &str, weight: i64) -> Self {
        if self.error.is_none() {
            self.error = self.inner.add_edge(a, b, weight).err();
        }
        self
    }

    /// Build the network, or return the first connection error.
    pub fn build(self) -> Result<MetroNetwork, NetworkError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_network() -> MetroNetwork {
        let mut network = MetroNetwork::new();
        network.add_station("X");
        network.add_station("Y");
        network
    }

    #[test]
    fn empty_network() {
        let network = MetroNetwork::new();
        assert!(network.is_empty());
        assert_eq!(network.len(), 0);
        assert_eq!(network.edge_count(), 0);
        assert_eq!(network.station_names().count(), 0);
    }

    #[test]
    fn add_edge_is_symmetric() {
        let mut network = xy_network();
        network.add_edge("X", "Y", 5).unwrap();

        assert_eq!(
            network.neighbors("X").unwrap(),
            &[Connection::new("Y", Weight::new(5))]
        );
        assert_eq!(
            network.neighbors("Y").unwrap(),
            &[Connection::new("X", Weight::new(5))]
        );
        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn add_edge_unknown_station_leaves_network_unchanged() {
        let mut network = xy_network();
        network.add_edge("X", "Y", 5).unwrap();
        let before = network.clone();

        let err = network.add_edge("X", "Z", 3).unwrap_err();
        assert_eq!(err, NetworkError::StationNotFound(StationName::from("Z")));
        assert_eq!(network, before);

        let err = network.add_edge("Z", "X", 3).unwrap_err();
        assert_eq!(err, NetworkError::StationNotFound(StationName::from("Z")));
        assert_eq!(network, before);
    }

    #[test]
    fn add_edge_negative_weight_leaves_network_unchanged() {
        let mut network = xy_network();
        let before = network.clone();

        let err = network.add_edge("X", "Y", -1).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight { .. }));
        assert_eq!(network, before);
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut network = xy_network();
        network.add_edge("X", "Y", 5).unwrap();
        network.add_edge("X", "Y", 5).unwrap();

        assert_eq!(network.neighbors("X").unwrap().len(), 2);
        assert_eq!(network.neighbors("Y").unwrap().len(), 2);
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let mut network = MetroNetwork::new();
        for name in ["A", "B", "C", "D"] {
            network.add_station(name);
        }
        network.add_edge("A", "D", 4).unwrap();
        network.add_edge("A", "B", 1).unwrap();
        network.add_edge("A", "C", 9).unwrap();

        let order: Vec<&str> = network
            .neighbors("A")
            .unwrap()
            .iter()
            .map(|c| c.station.as_str())
            .collect();
        assert_eq!(order, vec!["D", "B", "C"]);
    }

    #[test]
    fn self_loop_records_two_entries() {
        let mut network = MetroNetwork::new();
        network.add_station("L");
        network.add_edge("L", "L", 2).unwrap();

        assert_eq!(network.neighbors("L").unwrap().len(), 2);
        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn re_adding_station_clears_its_adjacency() {
        let mut network = xy_network();
        network.add_edge("X", "Y", 5).unwrap();

        network.add_station("X");

        assert!(network.neighbors("X").unwrap().is_empty());
        // The other side is untouched
        assert_eq!(network.neighbors("Y").unwrap().len(), 1);
        // Position is kept
        let names: Vec<&str> = network.station_names().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["X", "Y"]);
    }

    #[test]
    fn neighbors_unknown_station() {
        let network = xy_network();
        assert_eq!(
            network.neighbors("Q").unwrap_err(),
            NetworkError::StationNotFound(StationName::from("Q"))
        );
    }

    #[test]
    fn weight_between_uses_first_connection() {
        let mut network = xy_network();
        network.add_edge("X", "Y", 7).unwrap();
        network.add_edge("X", "Y", 3).unwrap();

        assert_eq!(network.weight_between("X", "Y"), Some(Weight::new(7)));
        assert_eq!(network.weight_between("Y", "X"), Some(Weight::new(7)));
        assert_eq!(network.weight_between("X", "X"), None);
        assert_eq!(network.weight_between("Q", "X"), None);
    }

    #[test]
    fn clear_removes_everything() {
        let mut network = xy_network();
        network.add_edge("X", "Y", 1).unwrap();
        network.clear();
        assert!(network.is_empty());
        assert!(!network.contains("X"));
    }

    #[test]
    fn builder() {
        let network = MetroNetworkBuilder::new()
            .station("A")
            .station("B")
            .station("C")
            .connection("A", "B", 5)
            .connection("B", "C", 3)
            .build()
            .unwrap();

        assert_eq!(network.len(), 3);
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.weight_between("C", "B"), Some(Weight::new(3)));
    }

    #[test]
    fn builder_reports_first_error() {
        let err = MetroNetworkBuilder::new()
            .stations(["A", "B"])
            .connection("A", "Missing", 5)
            .connection("A", "B", -2)
            .build()
            .unwrap_err();

        assert_eq!(err, NetworkError::StationNotFound(StationName::from("Missing")));
    }
}
