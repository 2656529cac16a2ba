//! Configuration loading
//!
//! `defaults/quoteviz.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. User files and command-line settings are layered on
//! top via [`Loader`] before deserializing into [`VizConfig`].

use crate::quoteviz::classify::ExpansionPolicy;
use crate::quoteviz::formats::treeviz::TreeRenderer;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use crossterm::tty::IsTty;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/quoteviz.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VizConfig {
    pub render: RenderConfig,
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub expansion: ExpansionPolicy,
    pub color: ColorMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Print the statistics line above tree output
    pub show_summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Color when standard output is a terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_tty(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl RenderConfig {
    /// Renderer carrying this configuration's policy and color mode
    pub fn renderer(&self) -> TreeRenderer {
        TreeRenderer::new()
            .with_policy(self.expansion)
            .colored(self.color.enabled())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<VizConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<VizConfig, ConfigError> {
    Loader::new().build()
}
