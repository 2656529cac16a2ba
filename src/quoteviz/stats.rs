//! Shape statistics for quoted trees
//!
//! A single pass classifies every visited node with
//! [`semantic_category`](crate::quoteviz::classify::semantic_category) and folds the
//! per-node records upward. Two shapes limit how far the walk goes:
//!
//! - a function call is only followed into its argument list (not its name or metadata)
//! - a variable is counted as one node and not entered at all
//!
//! Depth starts at 1 for the root, so a lone leaf has depth 1.

use crate::quoteviz::ast::Node;
use crate::quoteviz::classify::{semantic_category, SemanticCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth assigned to the root of an analyzed tree
pub const ROOT_DEPTH: usize = 1;

/// Node counts and maximum depth of a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub total_nodes: usize,
    pub max_depth: usize,
    pub function_calls: usize,
    pub variables: usize,
    pub literals: usize,
}

impl StatsRecord {
    fn literal(depth: usize) -> Self {
        StatsRecord {
            total_nodes: 1,
            max_depth: depth,
            literals: 1,
            ..Self::default()
        }
    }

    fn variable(depth: usize) -> Self {
        StatsRecord {
            total_nodes: 1,
            max_depth: depth,
            variables: 1,
            ..Self::default()
        }
    }

    /// Field-wise combination: counts add up, depth takes the maximum
    pub fn merge(self, other: StatsRecord) -> StatsRecord {
        StatsRecord {
            total_nodes: self.total_nodes + other.total_nodes,
            max_depth: self.max_depth.max(other.max_depth),
            function_calls: self.function_calls + other.function_calls,
            variables: self.variables + other.variables,
            literals: self.literals + other.literals,
        }
    }
}

impl fmt::Display for StatsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nodes: {}, Depth: {}, Funcs: {}, Vars: {}, Literals: {}",
            self.total_nodes, self.max_depth, self.function_calls, self.variables, self.literals
        )
    }
}

/// Analyze a whole tree
pub fn analyze(node: &Node) -> StatsRecord {
    stats(node, ROOT_DEPTH)
}

/// Analyze a subtree whose root sits at `depth`
pub fn stats(node: &Node, depth: usize) -> StatsRecord {
    match (semantic_category(node), node) {
        (SemanticCategory::Literal, _) => StatsRecord::literal(depth),
        (SemanticCategory::Variable, _) => StatsRecord::variable(depth),
        (SemanticCategory::FunctionCall, Node::Tuple(elements)) => {
            let args = match elements.get(2) {
                Some(Node::List(args)) => args.as_slice(),
                _ => &[],
            };
            let mut record = fold_children(args, depth);
            record.function_calls += 1;
            record
        }
        (_, node) => fold_children(node.children().unwrap_or_default(), depth),
    }
}

/// Merge the records of `children` one level down, then count the parent itself
fn fold_children(children: &[Node], depth: usize) -> StatsRecord {
    let merged = children
        .iter()
        .map(|child| stats(child, depth + 1))
        .fold(StatsRecord::default(), StatsRecord::merge);
    StatsRecord {
        total_nodes: merged.total_nodes + 1,
        max_depth: merged.max_depth.max(depth),
        ..merged
    }
}
