use fixedbitset::FixedBitSet;

use crate::problem::graph::Graph;
use crate::problem::Vertex;

/// Vertex the reachability check starts from.
const ROOT: Vertex = 0;

/// Cheap fast-reject: every vertex must be reachable from vertex `0` along outgoing arcs.
///
/// Necessary but not sufficient for a directed Hamiltonian path to exist.
pub fn is_connected(graph: &Graph) -> bool {
    reachable_from(graph, ROOT).count_ones(..) == graph.num_vertices()
}

pub fn reachable_from(graph: &Graph, root: Vertex) -> FixedBitSet {
    let mut visited = FixedBitSet::with_capacity(graph.num_vertices());
    let mut stack = vec![root];
    visited.insert(root);
    while let Some(v) = stack.pop() {
        for (next, _) in graph.successors(v) {
            if !visited.put(next) {
                stack.push(next);
            }
        }
    }
    visited
}
