//! Directory-name exclusion for discovery.
//!
//! Candidates are excluded by exact name match against an [`IgnoreSet`].
//! There is no glob or pattern support. Whether the comparison folds case is
//! decided once, from [`Platform::case_insensitive`], when the set is built.

use std::collections::HashSet;

use crate::config::Platform;

/// Directory names excluded from discovery unless configuration replaces them.
///
/// Covers operating-system artifacts, VCS and editor metadata, and the usual
/// build, output and cache folders.
pub const DEFAULT_IGNORED: &[&str] = &[
    // OS artifacts
    "$RECYCLE.BIN",
    "System Volume Information",
    ".Trash",
    ".Trashes",
    ".DS_Store",
    "Thumbs.db",
    // VCS and editor metadata
    ".git",
    ".svn",
    ".hg",
    ".idea",
    ".vscode",
    // Build and output
    "node_modules",
    "dist",
    "build",
    "target",
    "bin",
    "obj",
    "out",
    "tmp",
    "temp",
    "logs",
    "coverage",
    // Framework caches
    "__pycache__",
    ".cache",
    ".next",
    ".nuxt",
    ".angular",
    ".svelte-kit",
    ".gradle",
];

/// A set of directory names to exclude from discovery results.
#[derive(Clone, Debug)]
pub struct IgnoreSet {
    names: HashSet<String>,
    case_insensitive: bool,
}

impl IgnoreSet {
    /// Build a set from `names`, folding case when the platform requires it.
    #[must_use]
    pub fn new<I, S>(names: I, platform: Platform) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let case_insensitive = platform.case_insensitive;
        let names = names
            .into_iter()
            .map(|name| fold(name.as_ref(), case_insensitive))
            .collect();

        Self {
            names,
            case_insensitive,
        }
    }

    /// The built-in [`DEFAULT_IGNORED`] names.
    #[must_use]
    pub fn defaults(platform: Platform) -> Self {
        Self::new(DEFAULT_IGNORED.iter().copied(), platform)
    }

    /// An empty set that ignores nothing.
    #[must_use]
    pub fn empty(platform: Platform) -> Self {
        Self::new(std::iter::empty::<&str>(), platform)
    }

    /// Add more names to the set.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let case_insensitive = self.case_insensitive;
        self.names.extend(
            names
                .into_iter()
                .map(|name| fold(name.as_ref(), case_insensitive)),
        );
    }

    /// Whether a directory called `name` should be left out of the results.
    #[must_use]
    pub fn should_ignore(&self, name: &str) -> bool {
        if self.case_insensitive {
            self.names.contains(&name.to_lowercase())
        } else {
            self.names.contains(name)
        }
    }

    /// Number of distinct names in the set (after case folding).
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set contains no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Decide whether `name` is excluded by `ignore_set`.
#[must_use]
pub fn should_ignore(name: &str, ignore_set: &IgnoreSet) -> bool {
    ignore_set.should_ignore(name)
}

fn fold(name: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}
