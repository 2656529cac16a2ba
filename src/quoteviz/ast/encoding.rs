//! JSON data encoding of quoted trees
//!
//! Plain JSON values map onto the natural shapes, and single-key objects select a
//! shape explicitly where JSON has no native counterpart:
//!
//! ```text
//! [a, b]              List
//! "text"              string leaf
//! 42, 1.5             number leaf
//! true, false, null   atoms true, false, nil
//! {"tuple": [..]}     Tuple
//! {"list": [..]}      List
//! {"atom": "name"}    atom leaf
//! {"string": ".."}    string leaf
//! {"number": 42}      number leaf
//! {"other": ".."}     opaque leaf
//! ```
//!
//! Any other object is rejected as unclassifiable, reporting a JSON pointer to it.
//! YAML input goes through the same value model.

use super::{Leaf, Node};
use crate::quoteviz::error::VizError;
use serde_json::{Map, Value};

/// Decode a JSON value into a node
pub fn node_from_value(value: Value) -> Result<Node, VizError> {
    decode(value, "")
}

/// Encode a node with the explicit encoding (tuples, atoms and opaque leaves tagged)
pub fn node_to_value(node: &Node) -> Value {
    match node {
        Node::Tuple(elements) => tagged("tuple", Value::Array(encode_all(elements))),
        Node::List(elements) => Value::Array(encode_all(elements)),
        Node::Leaf(Leaf::Atom(name)) => tagged("atom", Value::String(name.clone())),
        Node::Leaf(Leaf::Str(value)) => Value::String(value.clone()),
        Node::Leaf(Leaf::Number(number)) => Value::Number(number.clone()),
        Node::Leaf(Leaf::Other(text)) => tagged("other", Value::String(text.clone())),
    }
}

fn encode_all(elements: &[Node]) -> Vec<Value> {
    elements.iter().map(node_to_value).collect()
}

fn tagged(tag: &str, payload: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(tag.to_string(), payload);
    Value::Object(map)
}

fn decode(value: Value, path: &str) -> Result<Node, VizError> {
    match value {
        Value::Null => Ok(Node::atom("nil")),
        Value::Bool(flag) => Ok(Node::atom(flag.to_string())),
        Value::Number(number) => Ok(Node::Leaf(Leaf::Number(number))),
        Value::String(text) => Ok(Node::string(text)),
        Value::Array(items) => decode_elements(items, path).map(Node::List),
        Value::Object(map) => decode_tagged(map, path),
    }
}

fn decode_elements(items: Vec<Value>, path: &str) -> Result<Vec<Node>, VizError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| decode(item, &format!("{path}/{i}")))
        .collect()
}

fn decode_tagged(map: Map<String, Value>, path: &str) -> Result<Node, VizError> {
    let key_count = map.len();
    let mut entries = map.into_iter();
    let (tag, payload) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(unclassifiable(
                path,
                format!("expected an object with exactly one key, found {key_count}"),
            ))
        }
    };

    let inner = format!("{path}/{tag}");
    match (tag.as_str(), payload) {
        ("tuple", Value::Array(items)) => decode_elements(items, &inner).map(Node::Tuple),
        ("list", Value::Array(items)) => decode_elements(items, &inner).map(Node::List),
        ("atom", Value::String(name)) => Ok(Node::atom(name)),
        ("string", Value::String(text)) => Ok(Node::string(text)),
        ("number", Value::Number(number)) => Ok(Node::Leaf(Leaf::Number(number))),
        ("other", Value::String(text)) => Ok(Node::other(text)),
        ("tuple" | "list", _) => Err(unclassifiable(&inner, format!("`{tag}` expects an array"))),
        ("atom" | "string" | "other", _) => {
            Err(unclassifiable(&inner, format!("`{tag}` expects a string")))
        }
        ("number", _) => Err(unclassifiable(&inner, "`number` expects a number".to_string())),
        _ => Err(unclassifiable(path, format!("unknown node tag `{tag}`"))),
    }
}

fn unclassifiable(path: &str, reason: String) -> VizError {
    VizError::UnclassifiableNode {
        path: if path.is_empty() { "/".to_string() } else { path.to_string() },
        reason,
    }
}

impl TryFrom<Value> for Node {
    type Error = VizError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        node_from_value(value)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node_to_value(&node)
    }
}
