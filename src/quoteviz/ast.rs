//! Node model for quoted syntax trees
//!
//! A quoted tree is built from three shapes only:
//!
//! ```text
//! Tuple   fixed-arity, ordered        {:+, [], [1, 2]}
//! List    variable-length, ordered    [1, 2, 3]
//! Leaf    irreducible scalar          :ok  "text"  42
//! ```
//!
//! Every walk in this crate (rendering, classification, statistics) matches on [`Node`]
//! exhaustively, so adding a shape is a compile error everywhere it matters.
//!
//! The inline (single-line) form lives in [`inline`], the JSON/YAML data encoding in
//! [`encoding`].

pub mod encoding;
pub mod inline;

pub use encoding::{node_from_value, node_to_value};
pub use inline::{Inline, InspectInline};

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A node of a quoted tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Node {
    /// Fixed-arity ordered sequence (a tuple or record)
    Tuple(Vec<Node>),
    /// Variable-length ordered sequence (a list or array)
    List(Vec<Node>),
    /// Opaque scalar
    Leaf(Leaf),
}

/// An irreducible value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// A symbol, stored without its `:` sigil (`nil`, `true` and `false` are atoms too)
    Atom(String),
    Str(String),
    Number(Number),
    /// Anything else, carried as its display text
    Other(String),
}

/// Leaf tag used for coloring and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafTag {
    Atom,
    String,
    Number,
    Other,
}

impl Leaf {
    pub fn tag(&self) -> LeafTag {
        match self {
            Leaf::Atom(_) => LeafTag::Atom,
            Leaf::Str(_) => LeafTag::String,
            Leaf::Number(_) => LeafTag::Number,
            Leaf::Other(_) => LeafTag::Other,
        }
    }
}

impl Node {
    pub fn tuple(elements: Vec<Node>) -> Self {
        Node::Tuple(elements)
    }

    pub fn list(elements: Vec<Node>) -> Self {
        Node::List(elements)
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Node::Leaf(Leaf::Atom(name.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::Leaf(Leaf::Str(value.into()))
    }

    pub fn int(value: i64) -> Self {
        Node::Leaf(Leaf::Number(Number::from(value)))
    }

    /// Build a number leaf from a float
    ///
    /// Non-finite values have no numeric encoding and become `Other` leaves
    /// carrying their display text (`NaN`, `inf`, `-inf`).
    pub fn float(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(number) => Node::Leaf(Leaf::Number(number)),
            None => Node::other(value.to_string()),
        }
    }

    pub fn other(text: impl Into<String>) -> Self {
        Node::Leaf(Leaf::Other(text.into()))
    }

    /// Shorthand for the call shape `{name, meta, args}`
    pub fn call(name: impl Into<String>, meta: Vec<Node>, args: Vec<Node>) -> Self {
        Node::Tuple(vec![Node::atom(name), Node::List(meta), Node::List(args)])
    }

    /// Shorthand for the variable shape `{name, meta, context}`
    pub fn var(name: impl Into<String>, context: impl Into<String>) -> Self {
        Node::Tuple(vec![Node::atom(name), Node::List(vec![]), Node::atom(context)])
    }

    /// Ordered children of a composite, `None` for a leaf
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Tuple(elements) | Node::List(elements) => Some(elements),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Leaf(Leaf::Atom(_)))
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}
