//! Node classification
//!
//! Two independent questions are answered here:
//!
//! - Structure: is a node a tuple, a list or a leaf, and does it deserve its own nested
//!   subtree when it shows up as a child ([`is_expandable`])?
//! - Semantics: what a node means in a quoted tree, for statistics
//!   ([`semantic_category`]).
//!
//! Expansion follows an [`ExpansionPolicy`]. The selective policy keeps shallow wrappers
//! such as `{:line, 1}` on one line and only opens composites that contain further
//! nesting; the eager policy opens every nonempty composite.

use crate::quoteviz::ast::{Leaf, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralKind {
    FixedComposite,
    VariableComposite,
    Leaf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticCategory {
    /// `{name, meta, args}` with an atom name and a list of arguments
    FunctionCall,
    /// `{name, meta, context}` with atom name and atom context
    Variable,
    /// Any other tuple or list
    Structural,
    Literal,
}

/// Which children get a nested subtree under their inline line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpansionPolicy {
    /// Expand composites that hold at least one nonempty composite
    #[default]
    Selective,
    /// Expand every nonempty composite
    Eager,
}

pub fn structural_kind(node: &Node) -> StructuralKind {
    match node {
        Node::Tuple(_) => StructuralKind::FixedComposite,
        Node::List(_) => StructuralKind::VariableComposite,
        Node::Leaf(_) => StructuralKind::Leaf,
    }
}

/// A nonzero-arity tuple or a nonempty list
pub fn is_complex(node: &Node) -> bool {
    node.children().is_some_and(|children| !children.is_empty())
}

pub fn is_expandable(node: &Node, policy: ExpansionPolicy) -> bool {
    let Some(children) = node.children() else {
        return false;
    };
    match policy {
        ExpansionPolicy::Selective => children.iter().any(is_complex),
        ExpansionPolicy::Eager => !children.is_empty(),
    }
}

pub fn semantic_category(node: &Node) -> SemanticCategory {
    match node {
        Node::Tuple(elements) => match elements.as_slice() {
            [Node::Leaf(Leaf::Atom(_)), _, Node::List(_)] => SemanticCategory::FunctionCall,
            [Node::Leaf(Leaf::Atom(_)), _, Node::Leaf(Leaf::Atom(_))] => {
                SemanticCategory::Variable
            }
            _ => SemanticCategory::Structural,
        },
        Node::List(_) => SemanticCategory::Structural,
        Node::Leaf(_) => SemanticCategory::Literal,
    }
}
