//! Configuration for the heuristic path engine.

use serde::{Deserialize, Serialize};

use super::SearchError;

/// Tuning parameters for the pheromone simulation.
///
/// Missing fields take their default when deserialized, so a partial config
/// such as `{"ant_count": 20}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Number of agents walking the network per round.
    pub ant_count: usize,

    /// Number of simulation rounds.
    pub rounds: usize,

    /// Pheromone influence exponent (α).
    pub alpha: f64,

    /// Distance influence exponent (β).
    pub beta: f64,

    /// Fraction of pheromone lost each time an edge is reinforced.
    pub evaporation_rate: f64,

    /// Pheromone level every directed edge starts with.
    pub initial_pheromone: f64,
}

impl HeuristicConfig {
    pub const DEFAULT_ANT_COUNT: usize = 10;
    pub const DEFAULT_ROUNDS: usize = 100;
    pub const DEFAULT_ALPHA: f64 = 1.0;
    pub const DEFAULT_BETA: f64 = 2.0;
    pub const DEFAULT_EVAPORATION_RATE: f64 = 0.1;
    pub const DEFAULT_INITIAL_PHEROMONE: f64 = 1.0;

    /// Create a new configuration with the given parameters.
    pub fn new(
        ant_count: usize,
        rounds: usize,
        alpha: f64,
        beta: f64,
        evaporation_rate: f64,
        initial_pheromone: f64,
    ) -> Self {
        Self {
            ant_count,
            rounds,
            alpha,
            beta,
            evaporation_rate,
            initial_pheromone,
        }
    }

    /// Returns a copy with a different number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// True when every tunable (ant count, α, β, evaporation rate, initial
    /// pheromone) differs from its default. The round count is not a tunable.
    ///
    /// When set, the final relaxation uses the layered perturbation.
    pub fn all_tunables_changed(&self) -> bool {
        self.ant_count != Self::DEFAULT_ANT_COUNT
            && self.alpha != Self::DEFAULT_ALPHA
            && self.beta != Self::DEFAULT_BETA
            && self.evaporation_rate != Self::DEFAULT_EVAPORATION_RATE
            && self.initial_pheromone != Self::DEFAULT_INITIAL_PHEROMONE
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(SearchError::InvalidConfig(
                "alpha and beta must be finite".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(SearchError::InvalidConfig(
                "evaporation rate must be between 0 and 1".to_string(),
            ));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(SearchError::InvalidConfig(
                "initial pheromone must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            ant_count: Self::DEFAULT_ANT_COUNT,
            rounds: Self::DEFAULT_ROUNDS,
            alpha: Self::DEFAULT_ALPHA,
            beta: Self::DEFAULT_BETA,
            evaporation_rate: Self::DEFAULT_EVAPORATION_RATE,
            initial_pheromone: Self::DEFAULT_INITIAL_PHEROMONE,
        }
    }
}
