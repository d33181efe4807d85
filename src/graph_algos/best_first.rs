use crate::collections::FxHashMap;
use crate::graph::{Graph, Heuristics};
use super::shortest_path::{route_segments, shortest_path};
use super::{Counters, Distance, NodeArena, SearchMode, SearchNode, SearchReport};

use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::Debug,
};
use num_traits::Float;
use tracing::{debug, trace};


/// Tolerance for cost comparisons, absorbs floating point drift along long paths
const COST_EPSILON: f64 = 1e-9;


/// Entry on the fringe
/// - ordering only needs the priority, the location for tie-breaks, and the arena index
/// - several entries may point at the same location; all but the cheapest are stale
#[derive(Debug)]
struct FringeEntry<'a, C> {
    priority: C,
    location: &'a str,
    index: usize, // arena index, earlier nodes win full ties
}

impl<C: Float> Ord for FringeEntry<'_, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lowest priority first
        other.priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.location.cmp(self.location))
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<C: Float> PartialOrd for FringeEntry<'_, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for FringeEntry<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Float> Eq for FringeEntry<'_, C> {}


/// Best-first route search over a loaded graph
/// https://en.wikipedia.org/wiki/Best-first_search
/// The finder only borrows its inputs; every call to `search` starts from fresh state,
/// so repeating a call returns an identical report.
pub struct RouteFinder<'g, C> {
    graph: &'g Graph<C>,
    heuristics: &'g Heuristics<C>,
}

impl<'g, C> RouteFinder<'g, C>
where
    C: Float + Debug,
{

    pub fn new(graph: &'g Graph<C>, heuristics: &'g Heuristics<C>) -> Self {
        Self { graph, heuristics }
    }

    /// Search from `start` until `goal` is popped off the fringe or the fringe runs dry.
    /// The first pop of the goal ends the search. That is optimal for A* with an admissible
    /// heuristic and for uniform-cost search, but not for greedy search.
    /// An unreachable goal is reported, not raised.
    pub fn search(&self, start: &str, goal: &str, mode: SearchMode) -> SearchReport<C> {
        debug!(%mode, start, goal, "starting best-first search");

        let epsilon = C::from(COST_EPSILON).unwrap_or_else(C::epsilon);
        let mut counters = Counters::default();

        // Open list, lowest priority first
        let mut fringe: BinaryHeap<FringeEntry<'_, C>> = BinaryHeap::new();

        // Every node ever generated; fringe entries and parent links refer to it by index
        let mut node_arena: NodeArena<'_, C> = Vec::new();

        // Lowest cost at which each location has been enqueued so far
        let mut best_cost: FxHashMap<&str, C> = FxHashMap::default();

        let h = self.estimate(start, mode);
        node_arena.push(SearchNode {
            location: start,
            parent: None,
            g: C::zero(),
            h,
            depth: 0,
        });
        fringe.push(FringeEntry {
            priority: mode.priority(C::zero(), h),
            location: start,
            index: 0,
        });
        best_cost.insert(start, C::zero());
        counters.generated = 1;

        while let Some(FringeEntry { index, .. }) = fringe.pop() {
            counters.popped += 1;
            let current = node_arena[index];
            trace!(location = current.location, g = ?current.g, h = ?current.h, "popped");

            if current.location == goal {
                debug!(
                    popped = counters.popped,
                    expanded = counters.expanded,
                    generated = counters.generated,
                    depth = current.depth,
                    "goal reached"
                );
                return Self::found(&node_arena, index, counters);
            }

            counters.expanded += 1;

            // A cheaper copy of this location was enqueued after this one, skip it
            let recorded = best_cost
                .get(&current.location)
                .copied()
                .unwrap_or_else(C::infinity);
            if current.g > recorded + epsilon {
                trace!(location = current.location, "stale entry discarded");
                continue;
            }

            for edge in self.graph.neighbors(current.location) {
                let new_g = current.g + edge.cost;
                let previous = best_cost
                    .get(&edge.to.as_str())
                    .copied()
                    .unwrap_or_else(C::infinity);

                // Near-equal costs do not count as an improvement
                if new_g + epsilon >= previous {
                    continue;
                }

                best_cost.insert(edge.to.as_str(), new_g);
                let h = self.estimate(&edge.to, mode);
                let child_index = node_arena.len();
                node_arena.push(SearchNode {
                    location: &edge.to,
                    parent: Some(index),
                    g: new_g,
                    h,
                    depth: current.depth + 1,
                });
                fringe.push(FringeEntry {
                    priority: mode.priority(new_g, h),
                    location: &edge.to,
                    index: child_index,
                });
                counters.generated += 1;
                trace!(location = edge.to.as_str(), g = ?new_g, "generated");
            }
        }

        debug!(
            popped = counters.popped,
            expanded = counters.expanded,
            generated = counters.generated,
            "fringe exhausted, goal unreachable"
        );
        SearchReport::unreachable(counters)
    }

    /// Heuristic for a location under the given mode
    fn estimate(&self, location: &str, mode: SearchMode) -> C {
        match mode {
            SearchMode::UniformCost => C::zero(),
            SearchMode::AStar | SearchMode::Greedy => self.heuristics.get(location),
        }
    }

    fn found(node_arena: &[SearchNode<'_, C>], goal_index: usize, counters: Counters) -> SearchReport<C> {
        let path = shortest_path(node_arena, goal_index);
        let route = path
            .iter()
            .map(|&i| node_arena[i].location.to_string())
            .collect();

        SearchReport {
            counters,
            distance: Distance::Reached(node_arena[goal_index].g),
            route,
            segments: route_segments(node_arena, &path),
        }
    }
}
