//! Lowest-cost routes between named locations.
//!
//! Load an undirected weighted graph (and optionally a table of cost-to-goal estimates),
//! then run one best-first search in A*, greedy, or uniform-cost order:
//!
//! ```
//! use findroute::{Graph, Heuristics, RouteFinder, SearchMode};
//!
//! let graph = Graph::from_edges([("A", "B", 5.0), ("B", "C", 5.0), ("A", "C", 20.0)]);
//! let heuristics = Heuristics::new();
//! let report = RouteFinder::new(&graph, &heuristics).search("A", "C", SearchMode::UniformCost);
//!
//! assert_eq!(report.distance.value(), Some(10.0));
//! assert_eq!(report.route, ["A", "B", "C"]);
//! ```

mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod loader;
mod report;

pub use errors::{Result, RouteError};
pub use graph::{Edge, Graph, Heuristics};
pub use graph_algos::{Counters, Distance, RouteFinder, SearchMode, SearchReport, Segment};
pub use loader::{load_edges, load_heuristics, parse_edges, parse_heuristics};
