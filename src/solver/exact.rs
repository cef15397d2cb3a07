use fixedbitset::FixedBitSet;
use log::debug;

use crate::problem::graph::Graph;
use crate::problem::{Vertex, Weight};
use crate::solution::Solution;
use crate::solver::context::SearchContext;
use crate::solver::stats::SearchStats;

pub struct EngineResult {
    pub best: Option<Solution>,
    pub stats: SearchStats,
}

/// Depth-first branch-and-bound over stop-constrained Hamiltonian paths.
///
/// Owns its `visited`/`path` buffers; only the [`SearchContext`] is shared. Every vertex
/// marked before descending is unmarked right after the recursive call returns, so the
/// buffers are back in their prior state whichever way a branch ends.
pub struct BranchAndBound<'a> {
    graph: &'a Graph,
    context: &'a SearchContext,
    visited: FixedBitSet,
    path: Vec<Vertex>,
    stats: SearchStats,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(graph: &'a Graph, context: &'a SearchContext) -> Self {
        Self {
            graph,
            context,
            visited: FixedBitSet::with_capacity(graph.num_vertices()),
            path: Vec::with_capacity(graph.num_vertices()),
            stats: SearchStats::default(),
        }
    }

    /// Enumerates every path starting at `start`, committing improvements to the context.
    pub fn explore_from(&mut self, start: Vertex) {
        debug_assert!(self.graph.is_stop(start));
        debug_assert!(self.path.is_empty());

        let nodes_before = self.stats.nodes;
        self.visited.insert(start);
        self.path.push(start);
        self.descend(0, 0, 1);
        self.path.pop();
        self.visited.set(start, false);

        debug!(
            "subtree of start {} done after {} nodes (bound: {})",
            start,
            self.stats.nodes - nodes_before,
            self.context.bound()
        );
    }

    pub fn take_stats(&mut self) -> SearchStats {
        std::mem::take(&mut self.stats)
    }

    /// `open` is the weight of the segment not yet closed by a stop, `closed_max` the largest
    /// closed segment on this branch.
    fn descend(&mut self, open: Weight, closed_max: Weight, stops_used: usize) {
        self.stats.nodes += 1;
        if closed_max >= self.context.bound() {
            self.stats.pruned_by_bound += 1;
            return;
        }

        let n = self.graph.num_vertices();
        let pos = self.path.len();
        if pos == n {
            // the last vertex is a stop, nothing left open
            debug_assert_eq!(open, 0);
            if self.context.try_commit(&self.path, closed_max) {
                self.stats.commits += 1;
                debug!("new best bound {} via {:?}", closed_max, &self.path);
            }
            return;
        }

        let last = self.path[pos - 1];
        for v in 0..n {
            if self.visited.contains(v) {
                continue;
            }
            let w = self.graph.weight(last, v);
            if w == 0 {
                continue;
            }

            let mut next_open = open + w;
            let mut next_closed_max = closed_max;
            let mut next_stops_used = stops_used;
            if self.graph.is_stop(v) {
                next_stops_used += 1;
                if next_stops_used == self.graph.num_stops() && pos != n - 1 {
                    self.stats.pruned_by_stop_order += 1;
                    continue;
                }
                if next_open >= self.context.bound() {
                    self.stats.pruned_by_bound += 1;
                    continue;
                }
                next_closed_max = next_closed_max.max(next_open);
                next_open = 0;
            }

            self.visited.insert(v);
            self.path.push(v);
            self.descend(next_open, next_closed_max, next_stops_used);
            self.path.pop();
            self.visited.set(v, false);
        }
    }
}

/// Sequential exact search, one start per stop vertex.
pub fn solve(graph: &Graph) -> EngineResult {
    let context = SearchContext::new();
    let stats = {
        let mut bnb = BranchAndBound::new(graph, &context);
        for start in graph.stops() {
            bnb.explore_from(start);
        }
        bnb.take_stats()
    };
    EngineResult {
        best: context.into_best(),
        stats,
    }
}
