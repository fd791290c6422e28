//! Pheromone levels for the heuristic engine's simulation phase.

use std::collections::HashMap;

use super::view::NetworkView;
use crate::domain::Distance;

/// Desirability of each directed edge, keyed by station index.
///
/// Lives for one query only.
#[derive(Debug, Clone)]
pub(crate) struct PheromoneTable {
    levels: Vec<HashMap<usize, f64>>,
}

impl PheromoneTable {
    /// Give every directed edge in the view the same starting level.
    pub fn new(view: &NetworkView<'_>, initial: f64) -> Self {
        let mut levels = vec![HashMap::new(); view.len()];
        for station in 0..view.len() {
            for &(next, _) in view.edges(station) {
                levels[station].insert(next, initial);
                levels[next].insert(station, initial);
            }
        }
        Self { levels }
    }

    /// Level on `from -> to`; zero when there is no such edge.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.levels[from].get(&to).copied().unwrap_or(0.0)
    }

    /// Evaporate and deposit on both directions of an edge an agent just
    /// walked: `level = (1 - evaporation) * level + 1 / distance`.
    ///
    /// Directions without an existing level are left alone, as are steps of
    /// zero or `UNREACHED` distance.
    pub fn reinforce(&mut self, a: usize, b: usize, distance: Distance, evaporation: f64) {
        let Some(d) = distance.get().filter(|&d| d > 0) else {
            return;
        };
        let deposit = 1.0 / d as f64;

        for (from, to) in [(a, b), (b, a)] {
            if let Some(level) = self.levels[from].get_mut(&to) {
                *level = (1.0 - evaporation) * *level + deposit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::MetroNetworkBuilder;

    #[test]
    fn initial_levels_are_uniform_on_edges() {
        let network = MetroNetworkBuilder::new()
            .stations(["A", "B", "C"])
            .connection("A", "B", 4)
            .build()
            .unwrap();
        let view = NetworkView::new(&network);
        let table = PheromoneTable::new(&view, 1.0);

        assert_eq!(table.get(0, 1), 1.0);
        assert_eq!(table.get(1, 0), 1.0);
        assert_eq!(table.get(0, 2), 0.0);
        assert_eq!(table.get(2, 2), 0.0);
    }

    #[test]
    fn reinforce_updates_both_directions() {
        let network = MetroNetworkBuilder::new()
            .stations(["A", "B"])
            .connection("A", "B", 4)
            .build()
            .unwrap();
        let view = NetworkView::new(&network);
        let mut table = PheromoneTable::new(&view, 1.0);

        table.reinforce(0, 1, Distance::new(4), 0.1);

        let expected = 0.9 * 1.0 + 0.25;
        assert!((table.get(0, 1) - expected).abs() < 1e-12);
        assert!((table.get(1, 0) - expected).abs() < 1e-12);
    }

    #[test]
    fn reinforce_skips_zero_and_unreached() {
        let network = MetroNetworkBuilder::new()
            .stations(["A", "B", "C"])
            .connection("A", "B", 0)
            .build()
            .unwrap();
        let view = NetworkView::new(&network);
        let mut table = PheromoneTable::new(&view, 1.0);

        table.reinforce(0, 1, Distance::ZERO, 0.1);
        table.reinforce(0, 2, Distance::UNREACHED, 0.1);

        assert_eq!(table.get(0, 1), 1.0);
        assert_eq!(table.get(0, 2), 0.0);
    }

    #[test]
    fn reinforce_does_not_create_levels() {
        let network = MetroNetworkBuilder::new()
            .stations(["A", "B"])
            .build()
            .unwrap();
        let view = NetworkView::new(&network);
        let mut table = PheromoneTable::new(&view, 1.0);

        table.reinforce(0, 1, Distance::new(3), 0.1);

        assert_eq!(table.get(0, 1), 0.0);
        assert_eq!(table.get(1, 0), 0.0);
    }
}
