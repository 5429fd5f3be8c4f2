use std::fmt::{self, Display};

use crate::relation::Relation;

/// A relation and one of its closures, rendered as a Graphviz digraph.
///
/// Every element of the set appears as a node, every pair of the original
/// relation as a plain edge, and every pair the closure added as a red
/// edge. Vertices are 1-indexed, matching the input format.
pub struct DotGraph<'a> {
    original: &'a Relation,
    closure: &'a Relation,
}

impl<'a> DotGraph<'a> {
    pub fn new(original: &'a Relation, closure: &'a Relation) -> Self {
        assert!(original.dim() == closure.dim());
        DotGraph { original, closure }
    }
}

impl Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph closure {{")?;
        for v in 1..=self.original.dim() {
            writeln!(f, "  {};", v)?;
        }
        writeln!(f)?;
        for (i, j) in self.original.pairs() {
            writeln!(f, "  {} -> {};", i + 1, j + 1)?;
        }
        for (i, j) in self.closure.pairs() {
            if !self.original.contains(i, j) {
                writeln!(f, "  {} -> {} [color=red];", i + 1, j + 1)?;
            }
        }
        writeln!(f, "}}")
    }
}
