//! Relation resolver: recursive fan-out traversal and the answer tree.
//!
//! Given a starting entity and an ordered list of relations, walks the graph
//! one hop at a time, branching on every returned value, and materializes a
//! tree recording every path taken. Depth is bounded by the query path
//! length, so the traversal always terminates.

mod resolver;
mod tree;

pub use resolver::{resolve, resolve_flat};
pub use tree::{AnswerNode, ROOT_RELATION};
