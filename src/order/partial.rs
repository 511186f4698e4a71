//! Partial orders and their linear extensions.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::error::{OrderError, Result};
use super::graph::Digraph;
use super::matrix::BitMatrix;
use super::preorder::{write_order, Element, Preorder};

/// A preorder that is also antisymmetric: no two distinct elements are tied.
///
/// Dereferences to [`Preorder`] for every query (`leq`, `less`, extrema, ...).
#[derive(Debug, Clone)]
pub struct PartialOrder<T>(Preorder<T>);

impl<T: Element> PartialOrder<T> {
    /// Closes `relations` and checks antisymmetry on the result.
    pub fn new(
        elements: impl IntoIterator<Item = T>,
        relations: impl IntoIterator<Item = (T, T)>,
    ) -> Result<Self> {
        Self::try_from_preorder(Preorder::new(elements, relations)?)
    }

    /// Like [`Preorder::from_closed`], plus the antisymmetry check.
    pub fn from_closed(
        elements: impl IntoIterator<Item = T>,
        relations: impl IntoIterator<Item = (T, T)>,
    ) -> Result<Self> {
        Self::try_from_preorder(Preorder::from_closed(elements, relations)?)
    }

    /// Accepts a preorder if no two distinct elements are mutually related.
    pub fn try_from_preorder(order: Preorder<T>) -> Result<Self> {
        let relation = order.relation();
        let n = order.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if relation.get(i, j) && relation.get(j, i) {
                    let e = order.elements();
                    return Err(OrderError::AntisymmetryViolation(
                        format!("{:?}", e[i]),
                        format!("{:?}", e[j]),
                    ));
                }
            }
        }
        Ok(PartialOrder(order))
    }

    /// The chain in which each item is below every item after it.
    pub fn total_order(items: impl IntoIterator<Item = T>) -> Result<Self> {
        let items: Vec<T> = items.into_iter().collect();
        let relations = items
            .iter()
            .enumerate()
            .flat_map(|(i, a)| items[i..].iter().map(move |b| (a.clone(), b.clone())));
        Self::new(items.iter().cloned(), relations)
    }

    pub fn as_preorder(&self) -> &Preorder<T> {
        &self.0
    }

    pub fn into_preorder(self) -> Preorder<T> {
        self.0
    }

    /// Restriction to `subset`; antisymmetry survives restriction.
    pub fn restrict<'a>(&self, subset: impl IntoIterator<Item = &'a T>) -> Result<PartialOrder<T>>
    where
        T: 'a,
    {
        Ok(PartialOrder(self.0.restrict(subset)?))
    }

    /// Cover pairs `(a, b)`: `a < b` with nothing in between.
    pub fn cover_pairs(&self) -> Vec<(&T, &T)> {
        self.hasse_edges()
            .into_iter()
            .map(|(lo, hi)| (lo[0], hi[0]))
            .collect()
    }

    /// Every linear extension as an element sequence, lowest first.
    ///
    /// Backtracks over the cover relation: at each step any element whose
    /// predecessors are all placed may come next. Each distinct total order
    /// is produced exactly once.
    pub fn linear_extensions(&self) -> Vec<Vec<T>> {
        let hasse = self.hasse();
        let covers = hasse.covers();
        let n = hasse.class_count();
        let mut indeg: Vec<usize> = (0..n).map(|c| covers.in_degree(c)).collect();
        let mut placed = vec![false; n];
        let mut current = Vec::with_capacity(n);
        let mut out = Vec::new();

        fn extend(
            covers: &Digraph,
            indeg: &mut [usize],
            placed: &mut [bool],
            current: &mut Vec<usize>,
            out: &mut Vec<Vec<usize>>,
        ) {
            if current.len() == placed.len() {
                out.push(current.clone());
                return;
            }
            for v in 0..placed.len() {
                if placed[v] || indeg[v] != 0 {
                    continue;
                }
                placed[v] = true;
                current.push(v);
                for &s in covers.successors(v) {
                    indeg[s] -= 1;
                }
                extend(covers, indeg, placed, current, out);
                for &s in covers.successors(v) {
                    indeg[s] += 1;
                }
                current.pop();
                placed[v] = false;
            }
        }

        extend(covers, &mut indeg, &mut placed, &mut current, &mut out);

        let elements = self.elements();
        out.into_iter()
            .map(|seq| {
                seq.into_iter()
                    .map(|c| elements[hasse.class(c)[0]].clone())
                    .collect()
            })
            .collect()
    }

    /// Every total order extending this one.
    pub fn completions(&self) -> Vec<PartialOrder<T>> {
        self.linear_extensions()
            .into_iter()
            .map(|seq| self.chain_from_sequence(&seq))
            .collect()
    }

    /// Builds the total order for a permutation of this order's elements.
    fn chain_from_sequence(&self, seq: &[T]) -> PartialOrder<T> {
        let elements = self.elements().to_vec();
        let index: HashMap<T, usize> = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.clone(), i))
            .collect();
        let rank: Vec<usize> = {
            let mut rank = vec![0; elements.len()];
            for (r, e) in seq.iter().enumerate() {
                rank[index[e]] = r;
            }
            rank
        };
        let mut relation = BitMatrix::new(elements.len());
        for i in 0..elements.len() {
            for j in 0..elements.len() {
                if rank[i] <= rank[j] {
                    relation.set(i, j);
                }
            }
        }
        PartialOrder(Preorder::from_matrix(elements, index, relation))
    }
}

impl<T> Deref for PartialOrder<T> {
    type Target = Preorder<T>;

    fn deref(&self) -> &Preorder<T> {
        &self.0
    }
}

impl<T: Element> PartialEq for PartialOrder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Element> Eq for PartialOrder<T> {}

impl<T: Element> Hash for PartialOrder<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Element + fmt::Display> fmt::Display for PartialOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_order(f, "PartialOrder", &self.0)
    }
}

/// Wire form of a partial order: its elements and cover pairs.
#[derive(Serialize, Deserialize)]
struct PartialOrderRepr<T> {
    elements: Vec<T>,
    covers: Vec<(T, T)>,
}

impl<T: Element + Serialize> Serialize for PartialOrder<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let repr = PartialOrderRepr {
            elements: self.elements().to_vec(),
            covers: self
                .cover_pairs()
                .into_iter()
                .map(|(a, b)| (a.clone(), b.clone()))
                .collect(),
        };
        repr.serialize(serializer)
    }
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for PartialOrder<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = PartialOrderRepr::<T>::deserialize(deserializer)?;
        PartialOrder::new(repr.elements, repr.covers).map_err(de::Error::custom)
    }
}
