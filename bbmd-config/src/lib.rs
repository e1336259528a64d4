//! Shared configuration loader for the bbmd toolchain.
//!
//! `defaults/bbmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BbmdConfig`].

use bbmd_babel::formats::html::HtmlOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/bbmd.default.toml");

/// Name of the per-directory configuration file picked up automatically.
pub const LOCAL_CONFIG_FILE: &str = "bbmd.toml";

/// Top-level configuration consumed by bbmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BbmdConfig {
    pub convert: ConvertConfig,
    pub render: RenderConfig,
    pub migrate: MigrateConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub html: HtmlRenderConfig,
}

/// Mirrors the knobs exposed by the HTML renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlRenderConfig {
    #[serde(rename = "unsafe")]
    pub allow_raw_html: bool,
    pub hardbreaks: bool,
}

impl From<&HtmlRenderConfig> for HtmlOptions {
    fn from(config: &HtmlRenderConfig) -> Self {
        HtmlOptions {
            allow_raw_html: config.allow_raw_html,
            hardbreaks: config.hardbreaks,
        }
    }
}

/// Batch migration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MigrateConfig {
    pub dry_run: bool,
    pub store: StoreConfig,
}

/// Where the records to migrate live.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub path: PathBuf,
    pub table: String,
    pub id_column: String,
    pub text_column: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StoreKind {
    #[serde(rename = "sqlite")]
    Sqlite,
    #[serde(rename = "json")]
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
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
    pub fn build(self) -> Result<BbmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BbmdConfig, ConfigError> {
    Loader::new().build()
}
