//! Dense square bit matrix used to store order relations.
//!
//! Row `i`, column `j` set means element `i` is related to element `j`
//! (`i <= j`). Rows are packed into `u64` words so that closure and
//! reduction can work a whole word at a time.

const WORD_BITS: usize = 64;

/// An `n x n` boolean matrix packed into 64-bit words, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    n: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl BitMatrix {
    /// Creates an all-false matrix of size `n x n`.
    pub fn new(n: usize) -> Self {
        let words_per_row = n.div_ceil(WORD_BITS).max(1);
        BitMatrix {
            n,
            words_per_row,
            bits: vec![0; n * words_per_row],
        }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        let word = self.bits[i * self.words_per_row + j / WORD_BITS];
        word & (1u64 << (j % WORD_BITS)) != 0
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize) {
        self.bits[i * self.words_per_row + j / WORD_BITS] |= 1u64 << (j % WORD_BITS);
    }

    fn row(&self, i: usize) -> &[u64] {
        &self.bits[i * self.words_per_row..(i + 1) * self.words_per_row]
    }

    /// ORs row `src` into row `dst`.
    fn or_row_into(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        let w = self.words_per_row;
        for k in 0..w {
            let v = self.bits[src * w + k];
            self.bits[dst * w + k] |= v;
        }
    }

    /// Sets every diagonal entry.
    pub fn close_reflexive(&mut self) {
        for i in 0..self.n {
            self.set(i, i);
        }
    }

    /// Warshall's algorithm over packed rows: after this call the relation
    /// is transitively closed.
    pub fn close_transitive(&mut self) {
        for k in 0..self.n {
            for i in 0..self.n {
                if self.get(i, k) {
                    self.or_row_into(k, i);
                }
            }
        }
    }

    /// Returns true if the relation is reflexive.
    pub fn is_reflexive(&self) -> bool {
        (0..self.n).all(|i| self.get(i, i))
    }

    /// Returns true if the relation is transitively closed.
    pub fn is_transitive(&self) -> bool {
        self.transitivity_gap().is_none()
    }

    /// Finds a pair `(i, j)` that transitivity requires but the relation
    /// lacks: some `k` has `i -> k` and `k -> j` while `i -> j` is unset.
    pub fn transitivity_gap(&self) -> Option<(usize, usize)> {
        for i in 0..self.n {
            for k in 0..self.n {
                if i == k || !self.get(i, k) {
                    continue;
                }
                if let Some(j) = self.row_ones(k).find(|&j| !self.get(i, j)) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// True if row `i` of `self` and row `j` of `other` share a set column.
    /// Both matrices must have the same size.
    pub fn rows_intersect(&self, i: usize, other: &BitMatrix, j: usize) -> bool {
        self.row(i)
            .iter()
            .zip(other.row(j))
            .any(|(a, b)| a & b != 0)
    }

    /// Returns the transpose.
    pub fn transposed(&self) -> BitMatrix {
        let mut t = BitMatrix::new(self.n);
        for i in 0..self.n {
            for j in self.row_ones(i) {
                t.set(j, i);
            }
        }
        t
    }

    /// Iterates over the set column indices of row `i`.
    pub fn row_ones(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let n = self.n;
        self.row(i).iter().enumerate().flat_map(move |(w, &word)| {
            (0..WORD_BITS)
                .filter(move |b| word & (1u64 << *b) != 0)
                .map(move |b| w * WORD_BITS + b)
                .filter(move |&j| j < n)
        })
    }

    /// Number of set entries.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}
