//! Exact single-source shortest paths.

use tracing::debug;

use super::frontier::relax;
use super::table::DistanceTable;
use super::view::NetworkView;
use crate::domain::NetworkError;
use crate::network::MetroNetwork;

/// Shortest distance from `source` to every station.
///
/// Stations with no path from the source are `UNREACHED`. The result is
/// deterministic for a given network.
///
/// # Example
///
/// ```
/// use metro_planner::network::MetroNetworkBuilder;
/// use metro_planner::planner::shortest_paths;
///
/// let network = MetroNetworkBuilder::new()
///     .stations(["P", "Q", "R"])
///     .connection("P", "Q", 10)
///     .connection("Q", "R", 20)
///     .build()
///     .unwrap();
///
/// let table = shortest_paths(&network, "P").unwrap();
/// assert_eq!(table.get("R").and_then(|d| d.get()), Some(30));
/// ```
pub fn shortest_paths(network: &MetroNetwork, source: &str) -> Result<DistanceTable, NetworkError> {
    let view = NetworkView::new(network);
    let source_idx = view.resolve(source)?;

    let labels = relax(&view, source_idx, || 0);
    let table = DistanceTable::from_labels(&view, source_idx, labels);

    debug!(
        source,
        stations = table.len(),
        unreached = table.unreached().count(),
        "exact search complete"
    );

    Ok(table)
}
