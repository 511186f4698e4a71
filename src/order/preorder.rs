//! Preorders: reflexive, transitive relations over a finite element set.
//!
//! A [`Preorder`] is always stored fully closed. Elements are deduplicated
//! and kept in sorted order, and the relation lives in a [`BitMatrix`]
//! indexed by element position, so `leq` is a hash lookup plus a bit test.
//!
//! Every preorder also carries its Hasse structure: elements are grouped
//! into equivalence classes (mutually `<=`), and the strict order between
//! classes is reduced to its cover edges.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{OrderError, Result};
use super::graph::Digraph;
use super::matrix::BitMatrix;

/// Anything that can be ordered: metric names, action profiles, integers.
pub trait Element: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Element for T {}

/// Equivalence classes of a preorder and the cover edges between them.
#[derive(Debug, Clone)]
pub struct Hasse {
    /// Element indices in each class, ascending.
    classes: Vec<Vec<usize>>,
    /// Class index of each element.
    class_of: Vec<usize>,
    /// Transitive reduction of the strict order between classes.
    covers: Digraph,
}

impl Hasse {
    fn build(relation: &BitMatrix) -> Self {
        let n = relation.size();
        let mut classes: Vec<Vec<usize>> = Vec::new();
        let mut class_of = vec![0; n];
        for i in 0..n {
            let found = classes.iter().position(|class| {
                let rep = class[0];
                relation.get(i, rep) && relation.get(rep, i)
            });
            match found {
                Some(c) => {
                    classes[c].push(i);
                    class_of[i] = c;
                }
                None => {
                    class_of[i] = classes.len();
                    classes.push(vec![i]);
                }
            }
        }

        let k = classes.len();
        let mut strict = BitMatrix::new(k);
        for a in 0..k {
            for b in 0..k {
                let (ra, rb) = (classes[a][0], classes[b][0]);
                if a != b && relation.get(ra, rb) && !relation.get(rb, ra) {
                    strict.set(a, b);
                }
            }
        }

        // a -> b is a cover unless some c sits strictly between them.
        let below = strict.transposed();
        let mut covers = Digraph::new(k);
        for a in 0..k {
            for b in strict.row_ones(a) {
                if !strict.rows_intersect(a, &below, b) {
                    covers.add_edge(a, b);
                }
            }
        }

        Hasse {
            classes,
            class_of,
            covers,
        }
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Element indices belonging to class `c`.
    pub fn class(&self, c: usize) -> &[usize] {
        &self.classes[c]
    }

    pub fn class_of(&self, element: usize) -> usize {
        self.class_of[element]
    }

    pub fn covers(&self) -> &Digraph {
        &self.covers
    }
}

/// A reflexive and transitive relation over a finite set of elements.
#[derive(Debug, Clone)]
pub struct Preorder<T> {
    elements: Vec<T>,
    index: HashMap<T, usize>,
    relation: BitMatrix,
    hasse: Hasse,
}

/// Sorts and deduplicates elements and builds the position index.
fn canonical_elements<T: Element>(elements: impl IntoIterator<Item = T>) -> (Vec<T>, HashMap<T, usize>) {
    let sorted: BTreeSet<T> = elements.into_iter().collect();
    let elements: Vec<T> = sorted.into_iter().collect();
    let index = elements
        .iter()
        .enumerate()
        .map(|(i, e)| (e.clone(), i))
        .collect();
    (elements, index)
}

/// Loads `(a, b)` pairs into a relation matrix, rejecting unknown elements.
fn load_relation<T: Element>(
    index: &HashMap<T, usize>,
    relations: impl IntoIterator<Item = (T, T)>,
) -> Result<BitMatrix> {
    let mut relation = BitMatrix::new(index.len());
    for (a, b) in relations {
        let ia = *index
            .get(&a)
            .ok_or_else(|| OrderError::UnknownElement(format!("{:?}", a)))?;
        let ib = *index
            .get(&b)
            .ok_or_else(|| OrderError::UnknownElement(format!("{:?}", b)))?;
        relation.set(ia, ib);
    }
    Ok(relation)
}

impl<T: Element> Preorder<T> {
    /// Builds the preorder generated by `relations`: the reflexive and
    /// transitive closure is computed before the Hasse structure.
    pub fn new(
        elements: impl IntoIterator<Item = T>,
        relations: impl IntoIterator<Item = (T, T)>,
    ) -> Result<Self> {
        let (elements, index) = canonical_elements(elements);
        let mut relation = load_relation(&index, relations)?;
        relation.close_reflexive();
        relation.close_transitive();
        Ok(Self::from_matrix(elements, index, relation))
    }

    /// Builds a preorder from a relation that is claimed to be closed
    /// already. The relation is validated instead of closed.
    pub fn from_closed(
        elements: impl IntoIterator<Item = T>,
        relations: impl IntoIterator<Item = (T, T)>,
    ) -> Result<Self> {
        let (elements, index) = canonical_elements(elements);
        let relation = load_relation(&index, relations)?;
        if let Some(i) = (0..elements.len()).find(|&i| !relation.get(i, i)) {
            return Err(OrderError::NotTransitiveOrReflexive(format!(
                "missing ({:?}, {:?})",
                elements[i], elements[i]
            )));
        }
        if let Some((i, j)) = relation.transitivity_gap() {
            return Err(OrderError::NotTransitiveOrReflexive(format!(
                "missing ({:?}, {:?})",
                elements[i], elements[j]
            )));
        }
        Ok(Self::from_matrix(elements, index, relation))
    }

    /// Closes `relation` over elements that are already sorted and distinct.
    pub(crate) fn from_sorted(elements: Vec<T>, mut relation: BitMatrix) -> Self {
        debug_assert!(elements.windows(2).all(|w| w[0] < w[1]));
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.clone(), i))
            .collect();
        relation.close_reflexive();
        relation.close_transitive();
        Self::from_matrix(elements, index, relation)
    }

    /// Assembles a preorder from canonical parts. `relation` must be closed.
    pub(crate) fn from_matrix(elements: Vec<T>, index: HashMap<T, usize>, relation: BitMatrix) -> Self {
        debug_assert!(relation.is_reflexive() && relation.is_transitive());
        let hasse = Hasse::build(&relation);
        Preorder {
            elements,
            index,
            relation,
            hasse,
        }
    }

    /// Elements in ascending order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, e: &T) -> bool {
        self.index.contains_key(e)
    }

    pub(crate) fn position(&self, e: &T) -> Option<usize> {
        self.index.get(e).copied()
    }

    pub(crate) fn relation(&self) -> &BitMatrix {
        &self.relation
    }

    pub fn hasse(&self) -> &Hasse {
        &self.hasse
    }

    /// `a <= b`. Elements outside the order are unrelated to everything.
    pub fn leq(&self, a: &T, b: &T) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => self.relation.get(i, j),
            _ => false,
        }
    }

    /// `a < b`: `a <= b` and not `b <= a`. False between tied elements.
    pub fn less(&self, a: &T, b: &T) -> bool {
        self.leq(a, b) && !self.leq(b, a)
    }

    pub fn geq(&self, a: &T, b: &T) -> bool {
        self.leq(b, a)
    }

    pub fn greater(&self, a: &T, b: &T) -> bool {
        self.less(b, a)
    }

    /// Every `(a, b)` with `a <= b`, including the reflexive pairs.
    pub fn relations(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        (0..self.elements.len()).flat_map(move |i| {
            self.relation
                .row_ones(i)
                .map(move |j| (&self.elements[i], &self.elements[j]))
        })
    }

    /// Number of related pairs, including the reflexive ones.
    pub fn relation_count(&self) -> usize {
        self.relation.count_ones()
    }

    /// True if every pair of elements is comparable.
    pub fn is_total(&self) -> bool {
        let n = self.elements.len();
        (0..n).all(|i| (0..n).all(|j| self.relation.get(i, j) || self.relation.get(j, i)))
    }

    /// The preorder induced on `subset`. The Hasse structure is rebuilt from
    /// scratch because equivalence classes and covers can change.
    pub fn restrict<'a>(&self, subset: impl IntoIterator<Item = &'a T>) -> Result<Preorder<T>>
    where
        T: 'a,
    {
        let (elements, index) = canonical_elements(subset.into_iter().cloned());
        let mut old = Vec::with_capacity(elements.len());
        for e in &elements {
            let i = self
                .position(e)
                .ok_or_else(|| OrderError::UnknownElement(format!("{:?}", e)))?;
            old.push(i);
        }
        let mut relation = BitMatrix::new(elements.len());
        for (ni, &oi) in old.iter().enumerate() {
            for (nj, &oj) in old.iter().enumerate() {
                if self.relation.get(oi, oj) {
                    relation.set(ni, nj);
                }
            }
        }
        relation.close_reflexive();
        relation.close_transitive();
        Ok(Self::from_matrix(elements, index, relation))
    }

    /// Equivalence classes as element lists, in class order.
    pub fn equivalence_classes(&self) -> Vec<Vec<&T>> {
        self.hasse
            .classes
            .iter()
            .map(|class| class.iter().map(|&i| &self.elements[i]).collect())
            .collect()
    }

    /// Cover edges of the Hasse structure, each end given as its class.
    pub fn hasse_edges(&self) -> Vec<(Vec<&T>, Vec<&T>)> {
        let classes = self.equivalence_classes();
        self.hasse
            .covers
            .edges()
            .map(|(a, b)| (classes[a].clone(), classes[b].clone()))
            .collect()
    }

    fn collect_classes(&self, pick: impl Fn(usize) -> bool) -> BTreeSet<T> {
        (0..self.hasse.class_count())
            .filter(|&c| pick(c))
            .flat_map(|c| self.hasse.classes[c].iter())
            .map(|&i| self.elements[i].clone())
            .collect()
    }

    /// Elements of every class with no class strictly below it.
    pub fn minimal_elements(&self) -> BTreeSet<T> {
        self.collect_classes(|c| self.hasse.covers.in_degree(c) == 0)
    }

    /// Elements of every class with no class strictly above it. Tied and
    /// mutually incomparable tops are all returned.
    pub fn maximal_elements(&self) -> BTreeSet<T> {
        self.collect_classes(|c| self.hasse.covers.out_degree(c) == 0)
    }
}

impl<T: Element> PartialEq for Preorder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements && self.relation == other.relation
    }
}

impl<T: Element> Eq for Preorder<T> {}

impl<T: Element> Hash for Preorder<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
        self.relation.hash(state);
    }
}

/// Writes a class as its sole element, or as `{a, b}` when tied.
pub(crate) fn write_class<T: fmt::Display>(f: &mut fmt::Formatter<'_>, class: &[&T]) -> fmt::Result {
    if let [only] = class {
        return write!(f, "{}", only);
    }
    write!(f, "{{")?;
    for (i, e) in class.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", e)?;
    }
    write!(f, "}}")
}

pub(crate) fn write_order<T: Element + fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    order: &Preorder<T>,
) -> fmt::Result {
    write!(f, "{}(elements: [", name)?;
    for (i, e) in order.elements().iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", e)?;
    }
    write!(f, "], hasse: [")?;
    for (i, (lo, hi)) in order.hasse_edges().iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_class(f, lo)?;
        write!(f, " -> ")?;
        write_class(f, hi)?;
    }
    write!(f, "])")
}

impl<T: Element + fmt::Display> fmt::Display for Preorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_order(f, "Preorder", self)
    }
}
