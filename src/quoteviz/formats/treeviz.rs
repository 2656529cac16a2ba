//! Treeviz formatter for quoted trees
//!
//! Treeviz is a box-drawn view of a quoted tree, one line per displayed node. The first
//! line is the inline form of the whole tree; below it every child of the root gets a
//! line with its inline form, and children that hold further nesting are opened into
//! their own subtree.
//!
//! So the format is:
//! <prefix><connector><inline form of child>
//!
//! Example:
//!
//! ```text
//! {:+, [], [{:x, [], nil}, {:y, [], nil}]}
//! ├── :+
//! ├── []
//! └── [{:x, [], nil}, {:y, [], nil}]
//!     ├── {:x, [], nil}
//!     └── {:y, [], nil}
//! ```
//!
//! Connectors:
//!     Middle child: ├──
//!     Last child:   └──
//! Continuation below a child:
//!     Middle child: │   (keeps the sibling rail running)
//!     Last child:   four spaces
//!
//! Which children are opened is decided by the [`ExpansionPolicy`]; the root is always
//! opened. A leaf root has an empty body, so its output is the inline line followed by a
//! newline. No depth or width limit is applied; deep trees recurse once per level.

use crate::quoteviz::ast::{Inline, InspectInline, Node};
use crate::quoteviz::classify::{is_expandable, ExpansionPolicy};
use crate::quoteviz::error::FormatError;
use crate::quoteviz::formats::colors::colorize;
use crate::quoteviz::formats::registry::Formatter;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const RAIL: &str = "│   ";
const GAP: &str = "    ";

/// Renders trees with a chosen expansion policy, color mode and inline form
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer<I = InspectInline> {
    policy: ExpansionPolicy,
    colored: bool,
    inline: I,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: Inline> TreeRenderer<I> {
    pub fn with_policy(mut self, policy: ExpansionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Swap the inline form used for the header and every child line
    pub fn with_inline<J: Inline>(self, inline: J) -> TreeRenderer<J> {
        TreeRenderer {
            policy: self.policy,
            colored: self.colored,
            inline,
        }
    }

    pub fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Header line, a newline, then the body of the root
    pub fn render(&self, node: &Node) -> String {
        let body = match node.children() {
            Some(children) => self.format_children(children, ""),
            None => String::new(),
        };
        format!("{}\n{}", self.display(node), body)
    }

    fn display(&self, node: &Node) -> String {
        if self.colored {
            colorize(node, &self.inline)
        } else {
            self.inline.inline(node)
        }
    }

    /// Build the lines for one sibling group under `prefix`
    fn format_children(&self, children: &[Node], prefix: &str) -> String {
        let child_count = children.len();
        let mut lines = Vec::with_capacity(child_count);

        for (i, child) in children.iter().enumerate() {
            let is_last = i == child_count - 1;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{}{}{}", prefix, connector, self.display(child)));

            if let Some(grandchildren) = child.children() {
                if is_expandable(child, self.policy) {
                    let child_prefix = format!("{}{}", prefix, if is_last { GAP } else { RAIL });
                    tracing::trace!(children = grandchildren.len(), "expanding subtree");
                    lines.push(self.format_children(grandchildren, &child_prefix));
                }
            }
        }

        lines.join("\n")
    }
}

/// Plain tree with the selective policy
pub fn to_treeviz_str(node: &Node) -> String {
    TreeRenderer::new().render(node)
}

/// Colored tree with the selective policy
pub fn to_treeviz_str_colored(node: &Node) -> String {
    TreeRenderer::new().colored(true).render(node)
}

/// Formatter implementation for treeviz formats
pub struct TreevizFormatter {
    name: &'static str,
    description: &'static str,
    renderer: TreeRenderer,
}

impl TreevizFormatter {
    pub fn plain() -> Self {
        TreevizFormatter {
            name: "treeviz",
            description: "Box-drawn tree, opening only composites that hold nesting",
            renderer: TreeRenderer::new(),
        }
    }

    pub fn eager() -> Self {
        TreevizFormatter {
            name: "treeviz-eager",
            description: "Box-drawn tree, opening every nonempty composite",
            renderer: TreeRenderer::new().with_policy(ExpansionPolicy::Eager),
        }
    }

    /// The `treeviz` format drawn by a configured renderer
    pub fn with_renderer(renderer: TreeRenderer) -> Self {
        TreevizFormatter {
            renderer,
            ..Self::plain()
        }
    }

    pub fn colored() -> Self {
        TreevizFormatter {
            name: "treeviz-color",
            description: "Box-drawn tree with colored atoms, strings and numbers",
            renderer: TreeRenderer::new().colored(true),
        }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        self.name
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(self.renderer.render(node))
    }

    fn description(&self) -> &str {
        self.description
    }
}
