//! Label relaxation over a min-priority frontier.
//!
//! Both engines finish with this pass. The exact engine adds nothing to an
//! improving relaxation; the heuristic engine adds a random amount.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::view::NetworkView;
use crate::domain::Distance;

/// Entry in the frontier. Ordered so `BinaryHeap` pops the smallest distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    distance: Distance,
    station: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; station index breaks ties
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Relax every edge reachable from `source` and return the final labels,
/// indexed like the view.
///
/// A neighbour improves when `current + weight` is below its stored label.
/// The stored label is then `current + weight + perturb()`; `perturb` is only
/// called for improving relaxations. Stations can sit in the frontier more
/// than once; entries above the station's current label are skipped when
/// popped.
pub(crate) fn relax<F>(view: &NetworkView<'_>, source: usize, mut perturb: F) -> Vec<Distance>
where
    F: FnMut() -> u64,
{
    let mut labels = vec![Distance::UNREACHED; view.len()];
    labels[source] = Distance::ZERO;

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        distance: Distance::ZERO,
        station: source,
    });

    let mut pops = 0usize;
    while let Some(FrontierEntry { distance, station }) = frontier.pop() {
        pops += 1;
        if distance > labels[station] {
            continue;
        }

        for &(next, weight) in view.edges(station) {
            let candidate = distance + weight;
            if candidate < labels[next] {
                let stored = candidate.saturating_add(perturb());
                labels[next] = stored;
                frontier.push(FrontierEntry {
                    distance: stored,
                    station: next,
                });
            }
        }
    }

    trace!(pops, "frontier exhausted");
    labels
}
