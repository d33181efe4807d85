pub mod best_first;
mod shortest_path;

pub use best_first::RouteFinder;

use std::fmt;

use num_traits::Float;


/// Fringe ordering used by the best-first search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Order by g + h
    #[default]
    AStar,
    /// Order by h only, ignoring the cost already paid
    Greedy,
    /// A* with every estimate forced to zero
    UniformCost,
}

impl SearchMode {

    /// Resolve a mode name, case-insensitively.
    /// Unknown names fall back to A* rather than being rejected.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "greedy" => SearchMode::Greedy,
            "ucs" | "uniform" | "uniform-cost" => SearchMode::UniformCost,
            _ => SearchMode::AStar,
        }
    }

    /// Fringe priority of a node, lower pops first
    pub(crate) fn priority<C: Float>(self, g: C, h: C) -> C {
        match self {
            SearchMode::Greedy => h,
            SearchMode::AStar | SearchMode::UniformCost => g + h,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::AStar => "astar",
            SearchMode::Greedy => "greedy",
            SearchMode::UniformCost => "uniform-cost",
        };
        f.write_str(name)
    }
}


/// One partial path from the start, stored in the per-search arena.
/// `parent` is the arena index of the node this one was generated from (None for the start),
/// always lower than the node's own index, so parent chains cannot loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SearchNode<'a, C> {
    pub location: &'a str,
    pub parent: Option<usize>,
    pub g: C, // cost from start
    pub h: C, // estimate to goal
    pub depth: usize, // edges from start
}

/// Arena holding every node generated during one search, indexed by creation order
pub(crate) type NodeArena<'a, C> = Vec<SearchNode<'a, C>>;


/// Per-search counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub popped: usize,
    pub expanded: usize,
    pub generated: usize,
}

/// Total route cost, or the marker for a goal that could not be reached
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance<C> {
    Reached(C),
    Unreachable,
}

impl<C: Copy> Distance<C> {
    pub fn value(&self) -> Option<C> {
        match self {
            Distance::Reached(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }
}

/// One hop of a found route
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<C> {
    pub from: String,
    pub to: String,
    pub distance: C,
}

/// Outcome of a single search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport<C> {
    pub counters: Counters,
    pub distance: Distance<C>,
    /// Locations from start to goal, empty when unreachable
    pub route: Vec<String>,
    pub segments: Vec<Segment<C>>,
}

impl<C: Copy> SearchReport<C> {

    pub(crate) fn unreachable(counters: Counters) -> Self {
        Self {
            counters,
            distance: Distance::Unreachable,
            route: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.distance, Distance::Reached(_))
    }

    /// Number of edges on the route
    pub fn hops(&self) -> usize {
        self.segments.len()
    }
}
