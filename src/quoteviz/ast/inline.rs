//! Inline (single-line) form of nodes
//!
//! The inline form is what every tree line shows next to its connector, and what the
//! header line shows for the whole tree. It reads like the inspected form of a quoted
//! expression:
//!
//! ```text
//! {:+, [line: 1], [{:x, [], nil}, 2]}
//! ```

use super::{Leaf, Node};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PLAIN_ATOM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z_][A-Za-z0-9_@]*[?!]?|[+\-*/<>=!&|^~.\\%]+)$").expect("valid regex")
});

/// Produces the compact single-line text of a node
///
/// The renderer calls this for the header line and for every child line, so
/// implementations must be deterministic.
pub trait Inline {
    fn inline(&self, node: &Node) -> String;
}

/// Default inline form, modelled on how quoted expressions are inspected
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectInline;

impl Inline for InspectInline {
    fn inline(&self, node: &Node) -> String {
        node.to_string()
    }
}

impl<F> Inline for F
where
    F: Fn(&Node) -> String,
{
    fn inline(&self, node: &Node) -> String {
        self(node)
    }
}

/// Atom text with its sigil, quoting names that are not plain identifiers or operators
pub fn atom_text(name: &str) -> String {
    match name {
        "nil" | "true" | "false" => name.to_string(),
        _ if PLAIN_ATOM.is_match(name) => format!(":{name}"),
        _ => format!(":{}", quoted(name)),
    }
}

/// Double-quoted string with backslash escapes
pub fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

fn write_sequence(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    elements: &[Node],
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    f.write_str(close)
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Atom(name) => f.write_str(&atom_text(name)),
            Leaf::Str(text) => f.write_str(&quoted(text)),
            Leaf::Number(number) => write!(f, "{number}"),
            Leaf::Other(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Tuple(elements) => write_sequence(f, "{", elements, "}"),
            Node::List(elements) => write_sequence(f, "[", elements, "]"),
            Node::Leaf(leaf) => write!(f, "{leaf}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atoms() {
        assert_eq!(atom_text("ok"), ":ok");
        assert_eq!(atom_text("valid?"), ":valid?");
        assert_eq!(atom_text("+"), ":+");
        assert_eq!(atom_text("|>"), ":|>");
        assert_eq!(atom_text("nil"), "nil");
        assert_eq!(atom_text("true"), "true");
        assert_eq!(atom_text("hello world"), ":\"hello world\"");
        assert_eq!(atom_text(""), ":\"\"");
    }

    #[test]
    fn test_strings_are_escaped() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_composites() {
        let node = Node::call(
            "+",
            vec![Node::tuple(vec![Node::atom("line"), Node::int(1)])],
            vec![Node::var("x", "nil"), Node::int(2)],
        );
        assert_eq!(node.to_string(), "{:+, [{:line, 1}], [{:x, [], nil}, 2]}");
        assert_eq!(Node::tuple(vec![]).to_string(), "{}");
        assert_eq!(Node::list(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_numbers_and_other() {
        assert_eq!(Node::int(-7).to_string(), "-7");
        assert_eq!(Node::float(2.5).to_string(), "2.5");
        assert_eq!(Node::other("#PID<0.1.0>").to_string(), "#PID<0.1.0>");
    }

    #[test]
    fn test_closure_as_inline() {
        let upper = |node: &Node| node.to_string().to_uppercase();
        assert_eq!(upper.inline(&Node::atom("ok")), ":OK");
        assert_eq!(InspectInline.inline(&Node::atom("ok")), ":ok");
    }
}
