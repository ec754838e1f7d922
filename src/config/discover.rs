//! Discovery configuration.
//!
//! This module defines the options that control which directories become
//! projects during a discovery pass. Defaults are explicit constants so the
//! engine carries no hidden process-wide state.

use crate::{config::Platform, favorites::Favorites, ignore::IgnoreSet};

/// Entries whose presence marks a directory as a genuine project.
pub const DEFAULT_INDICATORS: &[&str] = &[
    ".git",
    "package.json",
    ".vscode",
    "pom.xml",
    "build.gradle",
    "Cargo.toml",
    "go.mod",
];

/// Configuration for one discovery pass.
///
/// The options are a read-only snapshot; discovery never mutates them.
#[derive(Clone, Debug)]
pub struct DiscoverOptions {
    /// Only keep wildcard children that contain at least one indicator.
    /// Directly named roots are never subject to this check.
    pub require_indicator: bool,

    /// Names checked when `require_indicator` is set.
    pub indicators: Vec<String>,

    /// Directory names excluded from the results.
    pub ignore: IgnoreSet,

    /// Persisted favorites, used to flag results and order them first.
    pub favorites: Favorites,
}

impl DiscoverOptions {
    /// Default options with the ignore set built for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            require_indicator: false,
            indicators: DEFAULT_INDICATORS.iter().map(ToString::to_string).collect(),
            ignore: IgnoreSet::defaults(platform),
            favorites: Favorites::default(),
        }
    }
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self::new(Platform::native())
    }
}
