//! Project discovery across configured roots.
//!
//! Each configured root is normalized, checked for existence and then either
//! taken as a single project (literal root) or expanded into its immediate
//! subdirectories (wildcard root). Candidates pass through the ignore filter
//! and, for wildcard children only, the optional indicator check. Roots are
//! scanned in parallel; the per-root results are joined in configuration
//! order before the final favorites-first sort.
//!
//! A missing or unreadable root never aborts the pass. It is reported
//! through `tracing` and contributes no projects.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::DiscoverOptions,
    paths::{NormalizedRoot, PathNormalizer},
    sorting::sort_projects,
};

/// A project directory found during discovery.
///
/// Created fresh on every pass. `path` was an existing directory when the
/// pass ran.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct DiscoveredProject {
    /// Base name of the project directory.
    pub label: String,

    /// Absolute path to the project directory.
    pub path: PathBuf,

    /// Whether the path is marked as a favorite in the persisted map.
    pub is_favorite: bool,
}

/// Finds project directories under a set of configured roots.
#[derive(Clone, Debug)]
pub struct Discoverer {
    options: DiscoverOptions,
    normalizer: PathNormalizer,
}

impl Discoverer {
    /// Create a discoverer from a snapshot of the options.
    #[must_use]
    pub const fn new(options: DiscoverOptions, normalizer: PathNormalizer) -> Self {
        Self {
            options,
            normalizer,
        }
    }

    /// Discover projects under `roots`.
    ///
    /// Returns favorites first, then the rest, each group ordered by label.
    /// An empty root list yields an empty result.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use project_finder::{config::DiscoverOptions, discover::Discoverer, paths::PathNormalizer};
    /// let discoverer = Discoverer::new(DiscoverOptions::default(), PathNormalizer::native());
    /// for project in discoverer.discover(&["~/code/*", "~/notes"]) {
    ///     println!("{} {}", project.label, project.path.display());
    /// }
    /// ```
    pub fn discover<S>(&self, roots: &[S]) -> Vec<DiscoveredProject>
    where
        S: AsRef<str> + Sync,
    {
        let per_root: Vec<Vec<DiscoveredProject>> = roots
            .par_iter()
            .map(|root| self.discover_root(root.as_ref()))
            .collect();

        let mut projects = per_root.concat();
        sort_projects(&mut projects);

        debug!(roots = roots.len(), projects = projects.len(), "discovery complete");
        projects
    }

    /// Candidates contributed by a single configured root, in listing order.
    fn discover_root(&self, raw: &str) -> Vec<DiscoveredProject> {
        let NormalizedRoot { path, is_wildcard } = self.normalizer.normalize(raw);

        if !path.is_dir() {
            debug!(root = raw, path = %path.display(), "root is not an existing directory, skipping");
            return Vec::new();
        }

        let path = std::path::absolute(&path).unwrap_or(path);

        if is_wildcard {
            self.children_of(&path)
        } else {
            self.literal_root(path).into_iter().collect()
        }
    }

    /// A directly named root: ignore-filtered by its own name, never
    /// indicator-checked.
    fn literal_root(&self, path: PathBuf) -> Option<DiscoveredProject> {
        let label = match path.file_name() {
            Some(name) => {
                let name = name.to_string_lossy().into_owned();
                if self.options.ignore.should_ignore(&name) {
                    debug!(path = %path.display(), "root name is ignored");
                    return None;
                }
                name
            }
            None => path.display().to_string(),
        };

        Some(self.project(label, path))
    }

    /// Immediate subdirectories of a wildcard root, sorted by file name.
    fn children_of(&self, root: &Path) -> Vec<DiscoveredProject> {
        WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "failed to list directory");
                    None
                }
            })
            .filter(is_directory)
            .filter_map(|entry| self.wildcard_child(entry.into_path()))
            .collect()
    }

    fn wildcard_child(&self, path: PathBuf) -> Option<DiscoveredProject> {
        let label = path.file_name()?.to_string_lossy().into_owned();

        if self.options.ignore.should_ignore(&label) {
            debug!(path = %path.display(), "ignored by name");
            return None;
        }

        if self.options.require_indicator && !self.has_indicator(&path) {
            debug!(path = %path.display(), "no project indicator, skipping");
            return None;
        }

        Some(self.project(label, path))
    }

    fn has_indicator(&self, path: &Path) -> bool {
        self.options
            .indicators
            .iter()
            .any(|indicator| path.join(indicator).exists())
    }

    fn project(&self, label: String, path: PathBuf) -> DiscoveredProject {
        let is_favorite = self.options.favorites.is_favorite(&path);
        DiscoveredProject {
            label,
            path,
            is_favorite,
        }
    }
}

/// Discover projects under `roots` for the current host and user.
///
/// Shorthand for a [`Discoverer`] with [`PathNormalizer::native`].
#[must_use]
pub fn discover<S>(roots: &[S], options: &DiscoverOptions) -> Vec<DiscoveredProject>
where
    S: AsRef<str> + Sync,
{
    Discoverer::new(options.clone(), PathNormalizer::native()).discover(roots)
}

/// Directories, including symlinks that resolve to one.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
