//! Configuration handling for mk
//!
//! Parses the optional mk.toml file. Every field has a default, so a project
//! without the file runs with the template's layout.

mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MkError;

pub use schema::*;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Asset directory mapping
    #[serde(default)]
    pub dirs: DirsConfig,

    /// Script bundler settings
    #[serde(default)]
    pub bundler: BundlerConfig,

    /// Project initialization settings
    #[serde(default)]
    pub init: InitConfig,

    /// Root directory (computed from config file location)
    #[serde(skip)]
    pub root: PathBuf,
}

impl Config {
    /// Load configuration from a file path, falling back to defaults when
    /// the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let root = canonical_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        if !canonical_path.exists() {
            debug!("No config at {}, using defaults", canonical_path.display());
            return Ok(Self::default_config(root));
        }

        let content = fs::read_to_string(&canonical_path)
            .with_context(|| format!("Failed to read config file: {}", canonical_path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", canonical_path.display()))?;
        config.root = root;

        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration rooted at `root`
    pub fn default_config(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Reject directory mappings where roots of different categories overlap
    fn validate(&self) -> Result<()> {
        let categories = self.dirs.categories();

        for (i, (name, mapping)) in categories.iter().enumerate() {
            for (other_name, other) in categories.iter().skip(i + 1) {
                for a in [&mapping.source, &mapping.dev, &mapping.build] {
                    for b in [&other.source, &other.dev, &other.build] {
                        if paths_overlap(a, b) {
                            return Err(MkError::precondition(format!(
                                "directory '{}' of '{}' overlaps '{}' of '{}'",
                                a, name, b, other_name
                            ))
                            .into());
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolve a project-relative path against the root
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// True when one path equals or contains the other
fn paths_overlap(a: &str, b: &str) -> bool {
    let a = Path::new(a.trim_end_matches('/'));
    let b = Path::new(b.trim_end_matches('/'));
    a.starts_with(b) || b.starts_with(a)
}
