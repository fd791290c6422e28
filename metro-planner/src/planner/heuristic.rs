//! Pheromone-guided heuristic shortest paths.
//!
//! The engine runs in two phases. First, rounds of agents ("ants") walk from
//! the source until they have visited every station, choosing each next
//! station with probability weighted by pheromone and inverse distance, and
//! reinforcing the edges they walk. Second, a relaxation pass like the exact
//! engine's produces the distance table, adding a small random amount to
//! every improving relaxation.
//!
//! The simulation phase does not feed the table: its pheromone levels and
//! per-station best walks are dropped when it ends. Results are biased upward
//! relative to [`shortest_paths`](super::shortest_paths) and vary from call
//! to call.

use rand::Rng;
use tracing::{debug, trace};

use super::cancel::CancelToken;
use super::config::HeuristicConfig;
use super::error::SearchError;
use super::frontier::relax;
use super::pheromone::PheromoneTable;
use super::table::DistanceTable;
use super::view::NetworkView;
use crate::domain::Distance;
use crate::network::MetroNetwork;

/// Heuristic distances from `source` using the default configuration and a
/// thread-local random number generator.
pub fn heuristic_paths(network: &MetroNetwork, source: &str) -> Result<DistanceTable, SearchError> {
    HeuristicEngine::new(network, &HeuristicConfig::default()).run(source, &mut rand::thread_rng())
}

/// Heuristic path search over a network.
///
/// # Example
///
/// ```
/// use metro_planner::network::MetroNetworkBuilder;
/// use metro_planner::planner::{HeuristicConfig, HeuristicEngine};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let network = MetroNetworkBuilder::new()
///     .stations(["P", "Q"])
///     .connection("P", "Q", 10)
///     .build()
///     .unwrap();
/// let config = HeuristicConfig::default().with_rounds(5);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let table = HeuristicEngine::new(&network, &config).run("P", &mut rng).unwrap();
///
/// let q = table.get("Q").and_then(|d| d.get()).unwrap();
/// assert!((13..=14).contains(&q));
/// ```
pub struct HeuristicEngine<'a> {
    network: &'a MetroNetwork,
    config: &'a HeuristicConfig,
    cancel: Option<&'a CancelToken>,
}

impl<'a> HeuristicEngine<'a> {
    /// Create a new engine.
    pub fn new(network: &'a MetroNetwork, config: &'a HeuristicConfig) -> Self {
        Self {
            network,
            config,
            cancel: None,
        }
    }

    /// Stop early with [`SearchError::Cancelled`] once `token` is cancelled.
    ///
    /// The token is checked before each agent's walk and before the final
    /// relaxation.
    pub fn with_cancel(mut self, token: &'a CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run both phases from `source`, drawing randomness from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, source: &str, rng: &mut R) -> Result<DistanceTable, SearchError> {
        self.config.validate()?;

        let view = NetworkView::new(self.network);
        let source_idx = view.resolve(source)?;

        debug!(
            source,
            stations = view.len(),
            ants = self.config.ant_count,
            rounds = self.config.rounds,
            "starting heuristic search"
        );

        let colony = self.simulate(&view, source_idx, rng)?;
        debug!(
            walks = colony.walks,
            reached = colony.best_walks.iter().filter(|d| d.is_reached()).count(),
            "pheromone simulation complete"
        );

        self.check_cancelled()?;

        let perturbation = Perturbation::for_config(self.config);
        let labels = relax(&view, source_idx, || perturbation.draw(rng));
        let table = DistanceTable::from_labels(&view, source_idx, labels);

        debug!(
            source,
            unreached = table.unreached().count(),
            layered = perturbation.layered,
            "heuristic search complete"
        );

        Ok(table)
    }

    fn check_cancelled(&self) -> Result<(), SearchError> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(SearchError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Phase one: every round, every agent walks the whole network.
    fn simulate<R: Rng + ?Sized>(
        &self,
        view: &NetworkView<'_>,
        source: usize,
        rng: &mut R,
    ) -> Result<ColonySummary, SearchError> {
        let mut pheromones = PheromoneTable::new(view, self.config.initial_pheromone);
        let mut best_walks = vec![Distance::UNREACHED; view.len()];
        let mut walks = 0;

        for round in 0..self.config.rounds {
            for _ in 0..self.config.ant_count {
                self.check_cancelled()?;
                self.walk(view, source, &mut pheromones, &mut best_walks, rng);
                walks += 1;
            }
            trace!(round, "simulation round complete");
        }

        Ok(ColonySummary { walks, best_walks })
    }

    /// One agent's walk from the source until every station is visited.
    fn walk<R: Rng + ?Sized>(
        &self,
        view: &NetworkView<'_>,
        source: usize,
        pheromones: &mut PheromoneTable,
        best_walks: &mut [Distance],
        rng: &mut R,
    ) {
        let mut current = source;
        let mut travelled = Distance::ZERO;
        let mut unvisited: Vec<usize> = (0..view.len()).filter(|&s| s != source).collect();

        while !unvisited.is_empty() {
            let next = self.select_next(view, current, &unvisited, pheromones, rng);
            let step = view.step_distance(current, next);

            travelled = travelled.saturating_add(step.get().unwrap_or(u64::MAX));
            pheromones.reinforce(current, next, step, self.config.evaporation_rate);

            current = next;
            unvisited.retain(|&s| s != next);

            if travelled < best_walks[current] {
                best_walks[current] = travelled;
            }
        }
    }

    /// Pick the next station among *all* unvisited stations.
    ///
    /// Each candidate weighs `pheromone^alpha * (1 / distance)^beta`. A
    /// station with no direct edge has no pheromone and an `UNREACHED`
    /// distance, so it weighs (almost) nothing. Falls back to a uniform pick
    /// when the weights cannot be normalized.
    fn select_next<R: Rng + ?Sized>(
        &self,
        view: &NetworkView<'_>,
        current: usize,
        unvisited: &[usize],
        pheromones: &PheromoneTable,
        rng: &mut R,
    ) -> usize {
        let weights: Vec<f64> = unvisited
            .iter()
            .map(|&candidate| {
                let pheromone = pheromones.get(current, candidate);
                let distance = match view.step_distance(current, candidate).get() {
                    Some(d) => d as f64,
                    None => u64::MAX as f64,
                };
                pheromone.powf(self.config.alpha) * (1.0 / distance).powf(self.config.beta)
            })
            .collect();
        let total: f64 = weights.iter().sum();

        if total > 0.0 && total.is_finite() {
            let draw: f64 = rng.gen_range(0.0..1.0);
            let mut cumulative = 0.0;
            for (&candidate, weight) in unvisited.iter().zip(&weights) {
                cumulative += weight / total;
                if draw <= cumulative {
                    return candidate;
                }
            }
        }

        unvisited[rng.gen_range(0..unvisited.len())]
    }
}

/// What the simulation phase learned. Only logged.
struct ColonySummary {
    walks: usize,
    /// Shortest accumulated walk that ended a step at each station.
    best_walks: Vec<Distance>,
}

/// Random amount added to each improving relaxation in the final pass.
#[derive(Debug, Clone, Copy)]
struct Perturbation {
    /// Set only when all five tunables differ from their defaults.
    layered: bool,
}

impl Perturbation {
    fn for_config(config: &HeuristicConfig) -> Self {
        Self {
            layered: config.all_tunables_changed(),
        }
    }

    /// A base of 3 or 4. The layered form adds 0 or 1 on top, then adjusts
    /// totals of exactly 1 or 0 (which a base of 3..=4 never produces).
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let mut amount: i64 = rng.gen_range(3..=4);
        if self.layered {
            amount += rng.gen_range(0..=1);
            if amount == 1 {
                amount += rng.gen_range(0..=1) + 3;
            } else if amount == 0 {
                amount = amount - rng.gen_range(0..=1) + 2;
            }
        }
        u64::try_from(amount).unwrap_or(0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Weight;
    use crate::planner::shortest_paths;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn network_strategy() -> impl Strategy<Value = MetroNetwork> {
        (1usize..7).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, 0u32..40), 0..10).prop_map(move |edges| {
                let mut network = MetroNetwork::new();
                for i in 0..n {
                    network.add_station(format!("S{i}"));
                }
                for &(a, b, w) in &edges {
                    network
                        .add_connection(&format!("S{a}"), &format!("S{b}"), Weight::new(w))
                        .unwrap();
                }
                network
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Heuristic distances never undercut exact ones, and reach the same stations
        #[test]
        fn bounded_below_by_exact(network in network_strategy(), seed in any::<u64>()) {
            let config = HeuristicConfig::default().with_rounds(1);
            let exact = shortest_paths(&network, "S0").unwrap();
            let heuristic = HeuristicEngine::new(&network, &config)
                .run("S0", &mut StdRng::seed_from_u64(seed))
                .unwrap();

            prop_assert_eq!(heuristic.get("S0"), Some(Distance::ZERO));
            for (station, d) in exact.iter() {
                let h = heuristic.get(station.as_str()).unwrap();
                prop_assert!(h >= d);
                prop_assert_eq!(h.is_reached(), d.is_reached());
            }
        }
    }
}
