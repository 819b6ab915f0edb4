//! Shared configuration loader for the folio toolchain.
//!
//! `defaults/folio.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`FolioConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use folio_babel::formats::html::{HtmlOptions, LegacyMarkdownOptions};
use folio_babel::migrate::MigrateOptions;
use folio_babel::post::{PostDefaults, PostStatus};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/folio.default.toml");

/// Top-level configuration consumed by folio applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FolioConfig {
    pub render: RenderConfig,
    pub posts: PostsConfig,
    pub migrate: MigrateConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub legacy_markdown: LegacyMarkdownConfig,
}

/// Mirrors the knobs exposed by the legacy Markdown renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyMarkdownConfig {
    pub allow_raw_html: bool,
    pub strikethrough: bool,
    pub tables: bool,
    pub autolink: bool,
}

impl From<&LegacyMarkdownConfig> for LegacyMarkdownOptions {
    fn from(config: &LegacyMarkdownConfig) -> Self {
        LegacyMarkdownOptions {
            allow_raw_html: config.allow_raw_html,
            strikethrough: config.strikethrough,
            tables: config.tables,
            autolink: config.autolink,
        }
    }
}

impl From<&RenderConfig> for HtmlOptions {
    fn from(config: &RenderConfig) -> Self {
        HtmlOptions::new((&config.legacy_markdown).into())
    }
}

/// Placeholders used by the public post views.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsConfig {
    pub default_cover_image: String,
    pub default_author_picture: String,
    pub default_author_name: String,
}

impl From<&PostsConfig> for PostDefaults {
    fn from(config: &PostsConfig) -> Self {
        PostDefaults {
            cover_image: config.default_cover_image.clone(),
            author_picture: config.default_author_picture.clone(),
            author_name: config.default_author_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MigrateConfig {
    pub posts_dir: PathBuf,
    pub status: PostStatus,
}

impl From<&MigrateConfig> for MigrateOptions {
    fn from(config: &MigrateConfig) -> Self {
        MigrateOptions {
            status: config.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
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
    pub fn build(self) -> Result<FolioConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FolioConfig, ConfigError> {
    Loader::new().build()
}
