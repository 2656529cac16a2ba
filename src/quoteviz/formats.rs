//! Output format implementations for quoted trees
//!
//! This module contains the different ways a tree can be turned into text:
//! - box-drawn trees, plain or colored (treeviz)
//! - shape statistics, as a summary line or JSON (stats)
//! - the single-line inline form (inline)

pub mod colors;
pub mod inline;
pub mod registry;
pub mod stats;
pub mod treeviz;

pub use colors::{color_for, colorize};
pub use inline::InlineFormatter;
pub use registry::{FormatRegistry, Formatter};
pub use stats::{StatsFormatter, StatsJsonFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_colored, TreeRenderer, TreevizFormatter};
