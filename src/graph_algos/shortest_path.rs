use num_traits::Float;

use super::{SearchNode, Segment};


/// Walk parent links from the goal node back to the start node.
/// Returns arena indices ordered from start to goal.
/// node_arena: &[SearchNode] - every node generated by the search
/// goal_index: usize - index of the goal node in the arena
pub(crate) fn shortest_path<C>(node_arena: &[SearchNode<'_, C>], goal_index: usize) -> Vec<usize> {

    let mut path = Vec::new();
    let mut current = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current {
        let Some(node) = node_arena.get(index) else {
            break;
        };
        path.push(index);
        current = node.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


/// One segment per consecutive pair on the path.
/// Segment distance is the difference of cumulative costs, not a fresh edge lookup,
/// so parallel edges report the one actually taken.
pub(crate) fn route_segments<C: Float>(node_arena: &[SearchNode<'_, C>], path: &[usize]) -> Vec<Segment<C>> {
    path.windows(2)
        .map(|pair| {
            let a = &node_arena[pair[0]];
            let b = &node_arena[pair[1]];
            Segment {
                from: a.location.to_string(),
                to: b.location.to_string(),
                distance: b.g - a.g,
            }
        })
        .collect()
}
