//! Persisted favorite projects.
//!
//! Favorites are stored as a JSON object mapping project paths to a boolean,
//! located at `<data_dir>/project-finder/favorites.json` unless configured
//! otherwise. The whole map is read on load and written back as a full
//! replacement on save. Discovery only ever reads it.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Mapping of project path to favorite flag.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeMap<PathBuf, bool>);

impl Favorites {
    /// Whether `path` is marked as a favorite.
    #[must_use]
    pub fn is_favorite(&self, path: &Path) -> bool {
        self.0.get(path).copied().unwrap_or(false)
    }

    /// Set the favorite flag for `path`.
    pub fn set(&mut self, path: PathBuf, favorite: bool) {
        self.0.insert(path, favorite);
    }

    /// Flip the favorite flag for `path` and return the new value.
    pub fn toggle(&mut self, path: PathBuf) -> bool {
        let favorite = !self.is_favorite(&path);
        self.set(path, favorite);
        favorite
    }

    /// Paths currently marked as favorites, in path order.
    pub fn favorite_paths(&self) -> impl Iterator<Item = &Path> {
        self.0
            .iter()
            .filter(|(_, favorite)| **favorite)
            .map(|(path, _)| path.as_path())
    }

    /// Number of entries in the persisted map, favorite or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the persisted map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for Favorites {
    /// Collect paths into a map with every entry marked as a favorite.
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(|p| (p.into(), true)).collect())
    }
}

/// Reads and writes [`Favorites`] on disk.
#[derive(Clone, Debug)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// A store backed by the file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The platform default location, `<data_dir>/project-finder/favorites.json`.
    ///
    /// Returns `None` if the data directory cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("project-finder").join("favorites.json"))
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the favorites map. A missing file is an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of path to boolean.
    pub fn load(&self) -> Result<Favorites> {
        if !self.path.exists() {
            return Ok(Favorites::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read favorites at {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse favorites at {}", self.path.display()))
    }

    /// Replace the stored map with `favorites`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, favorites: &Favorites) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create favorites directory {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(favorites)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write favorites to {}", self.path.display()))
    }
}
