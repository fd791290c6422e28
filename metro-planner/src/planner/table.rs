//! Per-query distance tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::view::NetworkView;
use crate::domain::{Distance, StationName};

/// Distances from one source station to every station in the network.
///
/// Stations appear in network order. Serializes as
/// `{"source": ..., "distances": {name: number | null}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTable {
    source: StationName,
    distances: IndexMap<StationName, Distance>,
}

/// One row of a result table: how far a destination is from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub source: StationName,
    pub destination: StationName,
    pub distance: Distance,
}

impl RouteEntry {
    /// Distance in km, for networks stored in tenths of a km.
    pub fn distance_km(&self) -> Option<f64> {
        self.distance.as_km()
    }
}

impl DistanceTable {
    pub(crate) fn from_labels(view: &NetworkView<'_>, source: usize, labels: Vec<Distance>) -> Self {
        let distances = view
            .names()
            .iter()
            .zip(labels)
            .map(|(name, d)| ((*name).clone(), d))
            .collect();

        Self {
            source: view.name(source).clone(),
            distances,
        }
    }

    /// The station the distances are measured from.
    pub fn source(&self) -> &StationName {
        &self.source
    }

    /// Distance to a station, or `None` if the station was not in the network.
    pub fn get(&self, station: &str) -> Option<Distance> {
        self.distances.get(station).copied()
    }

    /// Number of stations in the table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the table has no stations.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StationName, Distance)> + '_ {
        self.distances.iter().map(|(name, d)| (name, *d))
    }

    /// Stations with a path from the source, including the source itself.
    pub fn reached(&self) -> impl Iterator<Item = (&StationName, u64)> + '_ {
        self.distances
            .iter()
            .filter_map(|(name, d)| d.get().map(|d| (name, d)))
    }

    /// Stations with no path from the source.
    pub fn unreached(&self) -> impl Iterator<Item = &StationName> + '_ {
        self.distances
            .iter()
            .filter(|(_, d)| !d.is_reached())
            .map(|(name, _)| name)
    }

    /// A row for every station except the source, in network order.
    pub fn routes(&self) -> Vec<RouteEntry> {
        self.distances
            .iter()
            .filter(|(name, _)| **name != self.source)
            .map(|(name, d)| RouteEntry {
                source: self.source.clone(),
                destination: name.clone(),
                distance: *d,
            })
            .collect()
    }

    /// Consumes the table, returning the station → distance map.
    pub fn into_map(self) -> IndexMap<StationName, Distance> {
        self.distances
    }
}
