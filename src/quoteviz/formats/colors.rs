//! Terminal colors for leaf values
//!
//! Colors are a fixed lookup keyed by leaf tag:
//!
//!     Atom:   blue, shown with its `:` sigil
//!     String: green, wrapped in double quotes
//!     Number: cyan
//!     Other:  uncolored
//!
//! Composites are never colored themselves; their leaves are colored on their own lines.

use crate::quoteviz::ast::{Inline, Leaf, LeafTag, Node};
use crossterm::style::{Color, ResetColor, SetForegroundColor};

/// Foreground color for a leaf tag, `None` when the tag stays uncolored
pub fn color_for(tag: LeafTag) -> Option<Color> {
    match tag {
        LeafTag::Atom => Some(Color::Blue),
        LeafTag::String => Some(Color::Green),
        LeafTag::Number => Some(Color::Cyan),
        LeafTag::Other => None,
    }
}

/// Wrap `text` in the escape sequences for `color`
pub fn paint(text: &str, color: Color) -> String {
    format!("{}{}{}", SetForegroundColor(color), text, ResetColor)
}

/// Colored display text of a node, falling back to `inline` for anything uncolored
pub fn colorize<I: Inline + ?Sized>(node: &Node, inline: &I) -> String {
    let Node::Leaf(leaf) = node else {
        return inline.inline(node);
    };
    let Some(color) = color_for(leaf.tag()) else {
        return inline.inline(node);
    };
    let text = match leaf {
        Leaf::Atom(name) => format!(":{name}"),
        Leaf::Str(value) => format!("\"{value}\""),
        _ => inline.inline(node),
    };
    paint(&text, color)
}
