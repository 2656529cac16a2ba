//! Top-level entry points
//!
//! The `print_*` functions write to standard output; the `write_*` functions take any
//! sink. Output is assembled in full before anything is written.
//!
//! # Example
//!
//! ```text
//! analyze_and_print(&node);
//!
//! Nodes: 3, Depth: 2, Funcs: 1, Vars: 2, Literals: 0
//! {:+, [], [{:x, [], nil}, {:y, [], nil}]}
//! ├── :+
//! ├── []
//! └── [{:x, [], nil}, {:y, [], nil}]
//!     ├── {:x, [], nil}
//!     └── {:y, [], nil}
//! ```

use crate::quoteviz::ast::{Inline, Node};
use crate::quoteviz::error::VizError;
use crate::quoteviz::formats::treeviz::TreeRenderer;
use crate::quoteviz::stats::analyze;
use std::io::{self, Write};

/// Write the rendered tree to `out`, followed by a newline
pub fn write_rendered<I: Inline, W: Write>(
    renderer: &TreeRenderer<I>,
    node: &Node,
    out: &mut W,
) -> Result<(), VizError> {
    let rendered = renderer.render(node);
    tracing::debug!(
        policy = ?renderer.policy(),
        colored = renderer.is_colored(),
        lines = rendered.lines().count(),
        "writing tree"
    );
    writeln!(out, "{rendered}")?;
    Ok(())
}

pub fn write_tree<W: Write>(node: &Node, out: &mut W) -> Result<(), VizError> {
    write_rendered(&TreeRenderer::new(), node, out)
}

pub fn write_tree_colored<W: Write>(node: &Node, out: &mut W) -> Result<(), VizError> {
    write_rendered(&TreeRenderer::new().colored(true), node, out)
}

/// Write the statistics summary line, then the plain tree
pub fn write_analysis<W: Write>(node: &Node, out: &mut W) -> Result<(), VizError> {
    let record = analyze(node);
    tracing::debug!(nodes = record.total_nodes, depth = record.max_depth, "analyzed tree");
    writeln!(out, "{record}")?;
    write_tree(node, out)
}

/// Render a tree to a string without writing it anywhere
pub fn tree_to_string(node: &Node) -> String {
    TreeRenderer::new().render(node)
}

pub fn print_tree(node: &Node) -> Result<(), VizError> {
    write_tree(node, &mut io::stdout().lock())
}

pub fn print_tree_colored(node: &Node) -> Result<(), VizError> {
    write_tree_colored(node, &mut io::stdout().lock())
}

pub fn analyze_and_print(node: &Node) -> Result<(), VizError> {
    write_analysis(node, &mut io::stdout().lock())
}
