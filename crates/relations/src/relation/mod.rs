//! Binary relations stored as dense adjacency matrices, the property
//! checkers for reflexivity, symmetry and transitivity, and the closure of
//! each property.

use std::fmt::{self, Display};

use rand::{
    Rng,
    distr::{Bernoulli, Distribution},
};

mod matrix;

pub use matrix::BoolMatrix;

/// A binary relation over the set `{1, …, n}`, stored as an n×n adjacency
/// matrix: entry `(i, j)` is true when the 1-indexed pair `(i + 1, j + 1)`
/// is a member. Everything in memory is 0-indexed; the 1-indexed view only
/// exists in the textual formats.
///
/// The input format allows a description to list pairs without ever
/// declaring a set size. Such a relation has no matrix at all, which is not
/// the same thing as a declared empty set, so the two states are separate
/// variants and every operation decides both. A size-less relation
/// satisfies no property; a declared empty set vacuously satisfies all of
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    /// No set size was ever declared; there is no matrix.
    Unsized,
    /// A relation over a declared set, possibly of zero elements.
    Sized(BoolMatrix),
}

impl Relation {
    /// The empty relation over a set of `n` elements.
    #[must_use]
    pub fn with_dim(n: usize) -> Relation {
        Relation::Sized(BoolMatrix::new(n))
    }

    /// Number of elements of the underlying set.
    pub fn dim(&self) -> usize {
        match self {
            Relation::Unsized => 0,
            Relation::Sized(m) => m.dim(),
        }
    }

    /// Returns true if the pair `(i, j)` is a member.
    #[must_use]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        match self {
            Relation::Unsized => false,
            Relation::Sized(m) => m[(i, j)],
        }
    }

    /// Add the pair `(i, j)`.
    ///
    /// Panics if the relation is unsized or an index is out of range.
    pub fn insert(&mut self, i: usize, j: usize) {
        match self {
            Relation::Unsized => panic!("cannot insert into an unsized relation"),
            Relation::Sized(m) => m[(i, j)] = true,
        }
    }

    /// Iterate over the member pairs in row-major order.
    pub fn pairs(&self) -> Pairs<'_> {
        Pairs { relation: self, i: 0, j: 0 }
    }

    /// Does every element relate to itself?
    #[must_use]
    pub fn is_reflexive(&self) -> bool {
        let m = match self {
            Relation::Unsized => return false,
            Relation::Sized(m) => m,
        };
        for i in 0..m.dim() {
            if !m[(i, i)] {
                return false;
            }
        }
        true
    }

    /// Is the relation invariant under reversing its pairs?
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let m = match self {
            Relation::Unsized => return false,
            Relation::Sized(m) => m,
        };
        for i in 0..m.dim() {
            for j in 0..m.dim() {
                if m[(i, j)] != m[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Does membership of `(i, j)` and `(j, k)` always imply `(i, k)`?
    #[must_use]
    pub fn is_transitive(&self) -> bool {
        let m = match self {
            Relation::Unsized => return false,
            Relation::Sized(m) => m,
        };
        for i in 0..m.dim() {
            for j in 0..m.dim() {
                if !m[(i, j)] {
                    continue;
                }
                for k in 0..m.dim() {
                    if m[(j, k)] && !m[(i, k)] {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// The smallest reflexive superset of the relation.
    #[must_use]
    pub fn reflexive_closure(&self) -> Relation {
        let m = match self {
            Relation::Unsized => return Relation::Unsized,
            Relation::Sized(m) => m,
        };
        let mut closed = m.clone();
        for i in 0..closed.dim() {
            closed[(i, i)] = true;
        }
        Relation::Sized(closed)
    }

    /// The smallest symmetric superset of the relation.
    #[must_use]
    pub fn symmetric_closure(&self) -> Relation {
        let m = match self {
            Relation::Unsized => return Relation::Unsized,
            Relation::Sized(m) => m,
        };
        // Decisions read the original matrix, so mirroring a pair can never
        // affect which pairs get mirrored.
        let mut closed = m.clone();
        for i in 0..m.dim() {
            for j in 0..m.dim() {
                if m[(i, j)] {
                    closed[(j, i)] = true;
                }
            }
        }
        Relation::Sized(closed)
    }

    /// The smallest transitive superset of the relation.
    ///
    /// Repeats full triple scans until a pass adds nothing. Each pass only
    /// ever sets bits, and at most n² can be set, so the fixpoint is
    /// reached after at most n² passes.
    #[must_use]
    pub fn transitive_closure(&self) -> Relation {
        let m = match self {
            Relation::Unsized => return Relation::Unsized,
            Relation::Sized(m) => m,
        };
        let mut closed = m.clone();
        let mut grew = true;
        while grew {
            grew = false;
            for i in 0..closed.dim() {
                for j in 0..closed.dim() {
                    if !closed[(i, j)] {
                        continue;
                    }
                    for k in 0..closed.dim() {
                        if closed[(j, k)] && !closed[(i, k)] {
                            closed[(i, k)] = true;
                            grew = true;
                        }
                    }
                }
            }
        }
        Relation::Sized(closed)
    }

    /// Sample a relation over `n` elements where each ordered pair is a
    /// member with probability `p`, where 0.0 <= `p` <= 1.0.
    pub fn bernoulli<R: Rng>(rng: &mut R, n: usize, p: f64) -> Relation {
        let dist = Bernoulli::new(p).unwrap();
        let mut m = BoolMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if dist.sample(rng) {
                    m[(i, j)] = true;
                }
            }
        }
        Relation::Sized(m)
    }
}

/// Writes the matrix as one comma-separated row of `0`/`1` cells per line.
/// A size-less relation has no matrix and writes nothing.
impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = match self {
            Relation::Unsized => return Ok(()),
            Relation::Sized(m) => m,
        };
        for i in 0..m.dim() {
            for j in 0..(m.dim() - 1) {
                let v = if m[(i, j)] { '1' } else { '0' };
                write!(f, "{},", v)?;
            }
            let v_last = if m[(i, m.dim() - 1)] { '1' } else { '0' };
            writeln!(f, "{}", v_last)?;
        }
        Ok(())
    }
}

/// Iterator over the member pairs of a [`Relation`], row-major.
pub struct Pairs<'a> {
    relation: &'a Relation,
    i: usize,
    j: usize,
}

impl Iterator for Pairs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let n = self.relation.dim();
        while self.i < n {
            let at = (self.i, self.j);
            self.j += 1;
            if self.j == n {
                self.j = 0;
                self.i += 1;
            }
            if self.relation.contains(at.0, at.1) {
                return Some(at);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::{SeedableRng, rngs::StdRng};

    use super::Relation;

    // `Gen` contains a rng, but it's a private member so this method is used
    // to get a standard rng generated from `Gen`
    fn std_rng(g: &mut Gen) -> StdRng {
        let mut seed = [0u8; 32];
        for i in 0..32 {
            seed[i] = Arbitrary::arbitrary(g);
        }
        StdRng::from_seed(seed)
    }

    impl Arbitrary for Relation {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut n: usize = Arbitrary::arbitrary(g);

            // `Arbitrary` for numbers generates extremes like `usize::MAX`,
            // and `n` sizes an n*n allocation, so it has to be bounded.
            n = n % g.size();

            Relation::bernoulli(&mut std_rng(g), n, 0.5)
        }
    }

    #[quickcheck]
    fn reflexive_closure_is_reflexive(relation: Relation) -> bool {
        relation.reflexive_closure().is_reflexive()
    }

    #[quickcheck]
    fn symmetric_closure_is_symmetric(relation: Relation) -> bool {
        relation.symmetric_closure().is_symmetric()
    }

    #[quickcheck]
    fn transitive_closure_is_transitive(relation: Relation) -> bool {
        relation.transitive_closure().is_transitive()
    }

    #[quickcheck]
    fn closures_only_add_pairs(relation: Relation) -> bool {
        let closures = [
            relation.reflexive_closure(),
            relation.symmetric_closure(),
            relation.transitive_closure(),
        ];
        closures.iter().all(|closed| {
            closed.dim() == relation.dim()
                && relation.pairs().all(|(i, j)| closed.contains(i, j))
        })
    }

    #[quickcheck]
    fn transitive_closure_is_a_fixpoint(relation: Relation) -> bool {
        let once = relation.transitive_closure();
        once.transitive_closure() == once
    }

    #[quickcheck]
    fn closure_of_satisfied_property_is_identity(relation: Relation) -> bool {
        (!relation.is_reflexive() || relation.reflexive_closure() == relation)
            && (!relation.is_symmetric() || relation.symmetric_closure() == relation)
            && (!relation.is_transitive() || relation.transitive_closure() == relation)
    }

    #[test]
    fn chain_needs_a_shortcut() {
        let mut relation = Relation::with_dim(3);
        relation.insert(0, 1);
        relation.insert(1, 2);
        assert!(!relation.is_transitive());

        let closed = relation.transitive_closure();
        assert!(closed.is_transitive());
        let pairs: Vec<(usize, usize)> = closed.pairs().collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn identity_is_already_reflexive() {
        let mut relation = Relation::with_dim(2);
        relation.insert(0, 0);
        relation.insert(1, 1);
        assert!(relation.is_reflexive());
        assert_eq!(relation.reflexive_closure(), relation);
    }

    #[test]
    fn lone_pair_gets_mirrored() {
        let mut relation = Relation::with_dim(2);
        relation.insert(0, 1);
        assert!(!relation.is_symmetric());

        let closed = relation.symmetric_closure();
        let pairs: Vec<(usize, usize)> = closed.pairs().collect();
        assert_eq!(pairs, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn declared_empty_set_satisfies_everything() {
        let relation = Relation::with_dim(0);
        assert!(relation.is_reflexive());
        assert!(relation.is_symmetric());
        assert!(relation.is_transitive());
        assert_eq!(relation.reflexive_closure(), relation);
        assert_eq!(relation.symmetric_closure(), relation);
        assert_eq!(relation.transitive_closure(), relation);
    }

    #[test]
    fn unsized_relation_satisfies_nothing() {
        let relation = Relation::Unsized;
        assert!(!relation.is_reflexive());
        assert!(!relation.is_symmetric());
        assert!(!relation.is_transitive());
        assert_eq!(relation.reflexive_closure(), Relation::Unsized);
        assert_eq!(relation.symmetric_closure(), Relation::Unsized);
        assert_eq!(relation.transitive_closure(), Relation::Unsized);
        assert_eq!(relation.pairs().count(), 0);
    }

    #[test]
    fn matrix_renders_as_rows() {
        let mut relation = Relation::with_dim(3);
        relation.insert(0, 1);
        relation.insert(1, 2);
        assert_eq!(relation.to_string(), "0,1,0\n0,0,1\n0,0,0\n");
        assert_eq!(Relation::with_dim(0).to_string(), "");
        assert_eq!(Relation::Unsized.to_string(), "");
    }
}
