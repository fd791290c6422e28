//! Shared planner context.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::cancel::CancelToken;
use super::config::HeuristicConfig;
use super::error::SearchError;
use super::exact::shortest_paths;
use super::heuristic::HeuristicEngine;
use super::table::DistanceTable;
use crate::domain::{NetworkError, StationName};
use crate::network::{Connection, MetroNetwork};

/// A metro network plus heuristic settings, shareable across threads.
///
/// Cloning gives another handle to the same network. Mutations take a write
/// lock, so a connection's two adjacency entries appear to readers together.
/// Queries hold a read lock for their whole run: any number can run in
/// parallel, and none observes a mutation halfway through.
#[derive(Debug, Clone, Default)]
pub struct MetroPlanner {
    network: Arc<RwLock<MetroNetwork>>,
    config: Arc<HeuristicConfig>,
}

impl MetroPlanner {
    /// Create a planner over an existing network.
    pub fn new(network: MetroNetwork, config: HeuristicConfig) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
            config: Arc::new(config),
        }
    }

    /// Heuristic settings used by [`MetroPlanner::heuristic_paths`].
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Register a station (clearing its connections if it already exists).
    pub fn add_station(&self, name: &str) {
        self.network.write().add_station(name);
    }

    /// Connect two existing stations.
    pub fn add_edge(&self, a: &str, b: &str, weight: i64) -> Result<(), NetworkError> {
        self.network.write().add_edge(a, b, weight)
    }

    /// Names of all stations.
    pub fn station_names(&self) -> Vec<StationName> {
        self.network.read().station_names().cloned().collect()
    }

    /// Connections of a station.
    pub fn neighbors(&self, station: &str) -> Result<Vec<Connection>, NetworkError> {
        self.network.read().neighbors(station).map(<[_]>::to_vec)
    }

    /// Remove every station and connection.
    pub fn clear(&self) {
        self.network.write().clear();
        debug!("network cleared");
    }

    /// A copy of the current network.
    pub fn snapshot(&self) -> MetroNetwork {
        self.network.read().clone()
    }

    /// Exact shortest distances from `source`.
    pub fn shortest_paths(&self, source: &str) -> Result<DistanceTable, NetworkError> {
        shortest_paths(&self.network.read(), source)
    }

    /// Heuristic distances from `source`.
    pub fn heuristic_paths(&self, source: &str) -> Result<DistanceTable, SearchError> {
        let network = self.network.read();
        HeuristicEngine::new(&network, &self.config).run(source, &mut rand::thread_rng())
    }

    /// Heuristic distances from `source`, stopping early if `token` is
    /// cancelled.
    pub fn heuristic_paths_cancellable(
        &self,
        source: &str,
        token: &CancelToken,
    ) -> Result<DistanceTable, SearchError> {
        let network = self.network.read();
        HeuristicEngine::new(&network, &self.config)
            .with_cancel(token)
            .run(source, &mut rand::thread_rng())
    }
}

impl From<MetroNetwork> for MetroPlanner {
    fn from(network: MetroNetwork) -> Self {
        Self::new(network, HeuristicConfig::default())
    }
}
