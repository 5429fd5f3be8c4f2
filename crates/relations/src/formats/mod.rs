//! The textual formats the relation tool speaks: the directive format a
//! relation is read from, and the Graphviz DOT format the closure results
//! are written to.

mod directives;
mod dot;

pub use directives::parse;
pub use dot::DotGraph;
