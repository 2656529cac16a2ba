//! Error types for quoteviz
//!
//! Rendering, classification and statistics are total over [`Node`](crate::quoteviz::ast::Node)
//! values and never fail. Errors only come from the edges: decoding input into a tree,
//! reading files, loading configuration and selecting output formats.
//!
//! Cyclic trees cannot be expressed: a node owns its children, so there is no cycle
//! error to report.

use thiserror::Error;

/// Error raised at the input, configuration or output boundary
#[derive(Debug, Error)]
pub enum VizError {
    /// An input value is neither a tuple, a list nor a leaf in the data encoding
    #[error("unclassifiable node at {path}: {reason}")]
    UnclassifiableNode { path: String, reason: String },

    /// Input format could not be determined or is not supported
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
