//! Statistics formatters
//!
//! `stats` prints the summary line above the plain tree, the same text
//! [`analyze_and_print`](crate::quoteviz::printing::analyze_and_print) writes.
//! `stats-json` emits only the record, for scripts.

use crate::quoteviz::ast::Node;
use crate::quoteviz::error::FormatError;
use crate::quoteviz::formats::registry::Formatter;
use crate::quoteviz::formats::treeviz::to_treeviz_str;
use crate::quoteviz::stats::analyze;

pub struct StatsFormatter;

impl Formatter for StatsFormatter {
    fn name(&self) -> &str {
        "stats"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(format!("{}\n{}", analyze(node), to_treeviz_str(node)))
    }

    fn description(&self) -> &str {
        "Summary line of node counts and depth, followed by the tree"
    }
}

pub struct StatsJsonFormatter;

impl Formatter for StatsJsonFormatter {
    fn name(&self) -> &str {
        "stats-json"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&analyze(node))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Node counts and depth as JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_format() {
        let node = Node::list(vec![Node::int(1), Node::atom("a")]);
        let out = StatsFormatter.serialize(&node).unwrap();
        assert_eq!(
            out,
            "Nodes: 3, Depth: 2, Funcs: 0, Vars: 0, Literals: 2\n[1, :a]\n├── 1\n└── :a"
        );
    }

    #[test]
    fn test_stats_json_format() {
        let node = Node::var("x", "nil");
        let out = StatsJsonFormatter.serialize(&node).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_nodes"], 1);
        assert_eq!(value["variables"], 1);
        assert_eq!(value["max_depth"], 1);
    }
}
