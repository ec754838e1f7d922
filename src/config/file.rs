//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/project-finder/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! # Roots to search. A trailing `/*` lists the immediate subdirectories.
//! project_folders = ["~/code/*", "~/work/*", "~/notes"]
//!
//! enable_project_indicators = true
//! project_indicators = [".git", "Cargo.toml", "package.json"]
//!
//! # Replaces the built-in ignore list entirely:
//! # ignored_folders = ["node_modules", "target"]
//! # Adds to whichever ignore list is in effect:
//! extra_ignored_folders = ["archive"]
//!
//! favorites_file = "~/.local/share/project-finder/favorites.json"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::{
    config::{DiscoverOptions, Platform},
    favorites::{Favorites, FavoritesStore},
    ignore::IgnoreSet,
    paths::PathNormalizer,
};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Roots to search for projects.
    pub project_folders: Option<Vec<String>>,

    /// Only keep wildcard children that contain a project indicator.
    pub enable_project_indicators: Option<bool>,

    /// Entry names that mark a directory as a project.
    pub project_indicators: Option<Vec<String>>,

    /// Directory names to exclude, replacing the built-in list.
    pub ignored_folders: Option<Vec<String>>,

    /// Directory names to exclude in addition to the list in effect.
    pub extra_ignored_folders: Option<Vec<String>>,

    /// Where favorites are persisted. `~` is expanded.
    pub favorites_file: Option<String>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/project-finder/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("project-finder").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or mistyped fields
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Same as [`FileConfig::load`].
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
    }

    /// Configured roots, or none.
    #[must_use]
    pub fn project_folders(&self) -> &[String] {
        self.project_folders.as_deref().unwrap_or_default()
    }

    /// Build the ignore set: `ignored_folders` replaces the defaults and
    /// `extra_ignored_folders` is appended on top.
    #[must_use]
    pub fn ignore_set(&self, platform: Platform) -> IgnoreSet {
        let mut set = self.ignored_folders.as_ref().map_or_else(
            || IgnoreSet::defaults(platform),
            |names| IgnoreSet::new(names, platform),
        );
        if let Some(extra) = &self.extra_ignored_folders {
            set.extend(extra);
        }
        set
    }

    /// Discovery options from file values, falling back to defaults.
    #[must_use]
    pub fn discover_options(&self, platform: Platform, favorites: Favorites) -> DiscoverOptions {
        let defaults = DiscoverOptions::new(platform);

        DiscoverOptions {
            require_indicator: self
                .enable_project_indicators
                .unwrap_or(defaults.require_indicator),
            indicators: self
                .project_indicators
                .clone()
                .unwrap_or(defaults.indicators),
            ignore: self.ignore_set(platform),
            favorites,
        }
    }

    /// The favorites store: `favorites_file` if set, else the platform default.
    #[must_use]
    pub fn favorites_store(&self, normalizer: &PathNormalizer) -> Option<FavoritesStore> {
        self.favorites_file
            .as_deref()
            .map(|raw| normalizer.normalize(raw).path)
            .or_else(FavoritesStore::default_path)
            .map(FavoritesStore::new)
    }
}
