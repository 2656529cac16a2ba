//! Inline formatter: the single-line form of the whole tree

use crate::quoteviz::ast::Node;
use crate::quoteviz::error::FormatError;
use crate::quoteviz::formats::registry::Formatter;

pub struct InlineFormatter;

impl Formatter for InlineFormatter {
    fn name(&self) -> &str {
        "inline"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(node.to_string())
    }

    fn description(&self) -> &str {
        "Single-line inspected form"
    }
}
