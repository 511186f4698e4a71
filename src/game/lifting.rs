//! Lifting a metric-priority order to a preorder over action profiles.
//!
//! For two profiles `x` and `y`, each metric is classified by comparing its
//! value at `x` against `y`. The player's priority order supplies an edge
//! `a -> b` whenever `a < b`, read as "`b` outranks `a`". Then `x <= y`
//! holds exactly when every metric on which `x` does better is an ancestor
//! of some metric on which `y` does better: each advantage of `x` is
//! overridden by an advantage of `y` on a higher-priority metric.
//!
//! With no advantage for `x` the condition holds trivially, which makes
//! the lifted relation reflexive. An advantage for `x` with nothing on
//! `y`'s side never holds.

use std::cmp::Ordering;

use super::metric::Metric;
use super::player::Player;
use super::profile::ActionProfile;
use crate::order::{BitMatrix, Digraph, Preorder};

/// How a metric compares between two profiles, from the first one's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
}

impl Comparison {
    /// Classifies `a` against `b`. Incomparable values count as equal.
    pub fn of(a: f64, b: f64) -> Comparison {
        match a.partial_cmp(&b) {
            Some(Ordering::Less) => Comparison::Less,
            Some(Ordering::Greater) => Comparison::Greater,
            _ => Comparison::Equal,
        }
    }
}

/// A player's priority order as a graph over metric positions.
#[derive(Debug, Clone)]
pub struct PriorityGraph {
    graph: Digraph,
}

impl PriorityGraph {
    /// Nodes follow `player.metrics()`; edge `a -> b` when `a < b`.
    pub fn new(player: &Player) -> Self {
        let names = player.preference().elements();
        let pref = player.preference();
        let mut graph = Digraph::new(names.len());
        for (a, na) in names.iter().enumerate() {
            for (b, nb) in names.iter().enumerate() {
                if pref.less(na, nb) {
                    graph.add_edge(a, b);
                }
            }
        }
        PriorityGraph { graph }
    }

    /// Decides `x <= y` from the per-metric comparisons of `x` against `y`.
    pub fn allows(&self, comparisons: &[Comparison]) -> bool {
        let greater: Vec<usize> = positions(comparisons, Comparison::Greater);
        if greater.is_empty() {
            return true;
        }
        let less = positions(comparisons, Comparison::Less);
        let overridden = self.graph.ancestors_of(&less);
        greater.iter().all(|&g| overridden[g])
    }
}

fn positions(comparisons: &[Comparison], wanted: Comparison) -> Vec<usize> {
    comparisons
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == wanted)
        .map(|(i, _)| i)
        .collect()
}

/// `x <= y` under `player`'s lifted preference, evaluating metrics directly.
pub fn induced_leq(player: &Player, x: &ActionProfile, y: &ActionProfile) -> bool {
    let comparisons: Vec<Comparison> = player
        .metrics()
        .iter()
        .map(|m| Comparison::of(m.evaluate(x), m.evaluate(y)))
        .collect();
    PriorityGraph::new(player).allows(&comparisons)
}

/// The lifted preorder of `player` over `profiles`.
///
/// Metrics are evaluated once per profile; the pairwise test then works on
/// the cached values. The result is closed like any other preorder.
pub fn induced_preorder(player: &Player, profiles: &[ActionProfile]) -> Preorder<ActionProfile> {
    let mut sorted: Vec<ActionProfile> = profiles.to_vec();
    sorted.sort();
    sorted.dedup();

    let metrics: &[Metric] = player.metrics();
    let m = metrics.len();
    let values: Vec<f64> = sorted
        .iter()
        .flat_map(|p| metrics.iter().map(move |metric| metric.evaluate(p)))
        .collect();

    let priority = PriorityGraph::new(player);
    let n = sorted.len();
    let mut relation = BitMatrix::new(n);
    let mut comparisons = vec![Comparison::Equal; m];
    for i in 0..n {
        for j in 0..n {
            let (vi, vj) = (&values[i * m..(i + 1) * m], &values[j * m..(j + 1) * m]);
            for k in 0..m {
                comparisons[k] = Comparison::of(vi[k], vj[k]);
            }
            if priority.allows(&comparisons) {
                relation.set(i, j);
            }
        }
    }
    Preorder::from_sorted(sorted, relation)
}
