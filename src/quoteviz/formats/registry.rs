//! Format registry for tree output
//!
//! This module provides a pluggable registry of output formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use super::{InlineFormatter, StatsFormatter, StatsJsonFormatter, TreevizFormatter};
use crate::quoteviz::ast::Node;
use crate::quoteviz::error::FormatError;
use std::collections::HashMap;

/// Trait for tree formatters
///
/// Implementors turn a whole tree into one string.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "stats")
    fn name(&self) -> &str;

    /// Serialize a tree to this format
    fn serialize(&self, node: &Node) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of tree formatters
///
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a tree using the specified format
    pub fn serialize(&self, node: &Node, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(node)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(TreevizFormatter::plain());
        registry.register(TreevizFormatter::eager());
        registry.register(TreevizFormatter::colored());
        registry.register(StatsFormatter);
        registry.register(StatsJsonFormatter);
        registry.register(InlineFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
