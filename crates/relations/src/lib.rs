//! Binary relations over finite sets, the reflexive, symmetric and
//! transitive properties, and the closures of those properties.
//!
//! A [`Relation`] is a dense adjacency matrix over a declared set
//! `{1, …, n}`. The property checkers are pure predicates and the closure
//! computers hand back fresh relations, so the original survives every
//! computation and can be compared against its closures. The [`formats`]
//! module parses the textual directive format a relation is read from, and
//! renders an (original, closure) pair as a Graphviz graph with the added
//! edges highlighted.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod formats;
pub mod relation;

pub use relation::Relation;
