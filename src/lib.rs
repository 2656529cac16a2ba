//! # quoteviz
//!
//! Box-drawn tree views and shape statistics for quoted syntax trees.
//!
//! File Layout
//!
//! src/quoteviz
//!   ├── ast        Node model, inline form and data encoding
//!   ├── classify   Structural kind, expansion policy, semantic category
//!   ├── formats    Tree renderer, colors and the format registry
//!   ├── stats      Single-pass statistics
//!   ├── printing   print/write entry points
//!   ├── loader     JSON / YAML input
//!   ├── config     Layered configuration
//!   └── error      Boundary errors
//!
//! Rendering, classification and statistics are pure walks over a borrowed tree; only
//! the loader, the config and the `print_*`/`write_*` entry points touch the outside world.

pub mod quoteviz;

pub use quoteviz::ast::{Leaf, LeafTag, Node};
pub use quoteviz::classify::ExpansionPolicy;
pub use quoteviz::error::{FormatError, VizError};
pub use quoteviz::formats::TreeRenderer;
pub use quoteviz::printing::{
    analyze_and_print, print_tree, print_tree_colored, tree_to_string,
};
pub use quoteviz::stats::{analyze, StatsRecord};
