//! Small directed graphs over integer-indexed nodes.
//!
//! All graphs in this crate are tiny (bounded by a metric count or by the
//! number of equivalence classes of an order), so plain adjacency lists and
//! depth-first search are all that is needed.

/// A directed graph over nodes `0..n` stored as forward and backward
/// adjacency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    succ: Vec<Vec<usize>>,
    pred: Vec<Vec<usize>>,
}

impl Digraph {
    /// Creates a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        Digraph {
            succ: vec![Vec::new(); n],
            pred: vec![Vec::new(); n],
        }
    }

    pub fn node_count(&self) -> usize {
        self.succ.len()
    }

    /// Adds the edge `from -> to`. Duplicate edges are ignored.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if self.succ[from].contains(&to) {
            return;
        }
        self.succ[from].push(to);
        self.pred[to].push(from);
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.succ[from].contains(&to)
    }

    pub fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }

    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.pred[node]
    }

    pub fn in_degree(&self, node: usize) -> usize {
        self.pred[node].len()
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    /// All edges in `(from, to)` form, ordered by source then insertion.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.succ
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&to| (from, to)))
    }

    /// Nodes from which at least one of `targets` is reachable by a path of
    /// length >= 1. A target is only its own ancestor if it lies on a cycle.
    pub fn ancestors_of(&self, targets: &[usize]) -> Vec<bool> {
        let mut seen = vec![false; self.node_count()];
        let mut stack: Vec<usize> = targets.to_vec();
        while let Some(node) = stack.pop() {
            for &p in &self.pred[node] {
                if !seen[p] {
                    seen[p] = true;
                    stack.push(p);
                }
            }
        }
        seen
    }

    /// Kahn's algorithm: true if every node can be removed in topological
    /// order.
    pub fn is_acyclic(&self) -> bool {
        let n = self.node_count();
        let mut indeg: Vec<usize> = (0..n).map(|v| self.in_degree(v)).collect();
        let mut ready: Vec<usize> = (0..n).filter(|&v| indeg[v] == 0).collect();
        let mut removed = 0;
        while let Some(v) = ready.pop() {
            removed += 1;
            for &s in &self.succ[v] {
                indeg[s] -= 1;
                if indeg[s] == 0 {
                    ready.push(s);
                }
            }
        }
        removed == n
    }
}
