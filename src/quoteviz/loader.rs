//! Tree loading utilities
//!
//! This module provides `NodeLoader` - a utility for loading the data encoding of a tree
//! (see [`encoding`](crate::quoteviz::ast::encoding)) from files or strings. This is used by
//! both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use quoteviz::quoteviz::loader::{InputFormat, NodeLoader};
//!
//! // From file, format picked from the extension
//! let node = NodeLoader::from_path("call.json")?.load()?;
//!
//! // From string
//! let node = NodeLoader::from_string("[1, 2]", InputFormat::Json).load()?;
//! ```

use crate::quoteviz::ast::{node_from_value, Node};
use crate::quoteviz::error::VizError;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Data encoding of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick a format from a file extension (`json`, `yaml`, `yml`)
    pub fn from_path(path: &Path) -> Result<Self, VizError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("yaml" | "yml") => Ok(InputFormat::Yaml),
            _ => Err(VizError::UnsupportedInput(format!(
                "cannot tell the format of '{}' (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Tree loader holding source text and its format
pub struct NodeLoader {
    source: String,
    format: InputFormat,
}

impl NodeLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, VizError> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path)?;
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), ?format, bytes = source.len(), "read input");
        Ok(NodeLoader { source, format })
    }

    /// Load everything from a reader (used for stdin)
    pub fn from_reader<R: Read>(mut reader: R, format: InputFormat) -> Result<Self, VizError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(NodeLoader { source, format })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S, format: InputFormat) -> Self {
        NodeLoader {
            source: source.into(),
            format,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// Decode the source into a tree
    pub fn load(&self) -> Result<Node, VizError> {
        let value: serde_json::Value = match self.format {
            InputFormat::Json => serde_json::from_str(&self.source)?,
            InputFormat::Yaml => serde_yaml::from_str(&self.source)?,
        };
        node_from_value(value)
    }
}
