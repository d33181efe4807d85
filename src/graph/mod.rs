mod heuristic;

pub use heuristic::Heuristics;

use crate::collections::FxIndexMap;


/// Directed half of an undirected connection, stored in the adjacency list of its origin
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<C> {
    pub to: String,
    pub cost: C,
}

/// Undirected weighted graph keyed by location name
/// Locations keep their first-seen order and every adjacency list keeps edge insertion order,
/// which is what makes node generation order reproducible.
/// Parallel edges and self-loops are stored exactly as given.
#[derive(Clone, Debug)]
pub struct Graph<C> {
    adjacency: FxIndexMap<String, Vec<Edge<C>>>,
    edge_count: usize,
}

impl<C> Default for Graph<C> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<C: Copy> Graph<C> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from (a, b, cost) triples in order
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, C)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (a, b, cost) in edges {
            graph.add_edge(a, b, cost);
        }
        graph
    }

    /// Register a connection usable in both directions at the same cost.
    /// Cost is not validated; negative weights are the caller's problem.
    pub fn add_edge(&mut self, a: impl Into<String>, b: impl Into<String>, cost: C) {
        let a = a.into();
        let b = b.into();

        self.adjacency
            .entry(a.clone())
            .or_default()
            .push(Edge { to: b.clone(), cost });
        self.adjacency
            .entry(b)
            .or_default()
            .push(Edge { to: a, cost });

        self.edge_count += 1;
    }

    /// Adjacent locations with edge costs, in the order the edges were added
    pub fn neighbors(&self, location: &str) -> &[Edge<C>] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Locations in first-seen order
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges loaded (each counted once)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn targets(graph: &Graph<f64>, location: &str) -> Vec<(String, f64)> {
        graph.neighbors(location)
            .iter()
            .map(|e| (e.to.clone(), e.cost))
            .collect()
    }

    #[test]
    fn test_edges_are_bidirectional() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5.0);

        assert_eq!(targets(&graph, "A"), vec![("B".to_string(), 5.0)]);
        assert_eq!(targets(&graph, "B"), vec![("A".to_string(), 5.0)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.location_count(), 2);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let graph = Graph::from_edges([
            ("A", "C", 20.0),
            ("A", "B", 5.0),
            ("D", "A", 1.0),
        ]);

        let names: Vec<_> = graph.neighbors("A").iter().map(|e| e.to.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "D"]);

        let order: Vec<_> = graph.locations().collect();
        assert_eq!(order, vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_are_kept() {
        let graph = Graph::from_edges([
            ("A", "B", 5.0),
            ("A", "B", 3.0),
            ("C", "C", 1.0),
        ]);

        assert_eq!(
            targets(&graph, "A"),
            vec![("B".to_string(), 5.0), ("B".to_string(), 3.0)]
        );
        // One entry per direction
        assert_eq!(
            targets(&graph, "C"),
            vec![("C".to_string(), 1.0), ("C".to_string(), 1.0)]
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_unknown_location_has_no_neighbors() {
        let graph = Graph::from_edges([("A", "B", 1.0)]);

        assert!(graph.neighbors("Z").is_empty());
        assert!(!graph.contains("Z"));
        // Lookups are case-sensitive
        assert!(!graph.contains("a"));
    }

    #[test]
    fn test_negative_costs_are_accepted() {
        let graph = Graph::from_edges([("A", "B", -2.5)]);
        assert_eq!(targets(&graph, "B"), vec![("A".to_string(), -2.5)]);
    }
}
