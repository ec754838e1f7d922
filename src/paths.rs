//! Normalization of configured root strings into usable paths.
//!
//! Configured roots may start with `~`, may use the POSIX-style `/d/...`
//! spelling of a drive letter, and may end with a `/*` wildcard marker that
//! asks for the root's children to be listed instead of the root itself.
//! [`PathNormalizer`] rewrites such strings without touching the filesystem.

use std::path::PathBuf;

use crate::config::Platform;

/// A configured root after normalization.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NormalizedRoot {
    /// The usable path, with any wildcard marker removed.
    pub path: PathBuf,

    /// `true` when the root ended with a wildcard marker, meaning its
    /// immediate subdirectories are the candidates rather than the root itself.
    pub is_wildcard: bool,
}

/// Rewrites raw root strings into platform-native paths.
///
/// The normalizer is a pure transform: the home directory is resolved once
/// by the caller and handed in, and the platform conventions come from a
/// [`Platform`] value rather than from the host.
#[derive(Clone, Debug)]
pub struct PathNormalizer {
    platform: Platform,
    home: Option<PathBuf>,
}

impl PathNormalizer {
    /// Create a normalizer for `platform`, expanding `~` to `home`.
    ///
    /// With `home` set to `None`, paths starting with `~` are left as they are.
    #[must_use]
    pub const fn new(platform: Platform, home: Option<PathBuf>) -> Self {
        Self { platform, home }
    }

    /// A normalizer for the current host and the current user's home directory.
    #[must_use]
    pub fn native() -> Self {
        Self::new(Platform::native(), dirs::home_dir())
    }

    /// The platform conventions this normalizer applies.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Normalize a configured root.
    ///
    /// Applies, in order: tilde expansion, drive-letter rewrite (drive-letter
    /// platforms only) and wildcard-suffix stripping.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::PathBuf;
    /// # use project_finder::{config::Platform, paths::PathNormalizer};
    /// let normalizer = PathNormalizer::new(Platform::posix(), Some(PathBuf::from("/home/u")));
    /// let root = normalizer.normalize("~/code/*");
    /// assert_eq!(root.path, PathBuf::from("/home/u/code"));
    /// assert!(root.is_wildcard);
    /// ```
    #[must_use]
    pub fn normalize(&self, raw: &str) -> NormalizedRoot {
        let expanded = self.expand_tilde(raw);

        let native = if self.platform.drive_letters {
            rewrite_drive_letter(&expanded)
        } else {
            expanded
        };

        let (path, is_wildcard) = self.strip_wildcard(native);

        NormalizedRoot {
            path: PathBuf::from(path),
            is_wildcard,
        }
    }

    /// Replace a leading `~` (alone or followed by a separator) with the home
    /// directory, joining the remainder as a path rather than concatenating.
    fn expand_tilde(&self, raw: &str) -> String {
        let Some(rest) = raw.strip_prefix('~') else {
            return raw.to_string();
        };
        let Some(home) = &self.home else {
            return raw.to_string();
        };

        if let Some(first) = rest.chars().next()
            && !self.is_separator(first)
        {
            // `~user` forms are not expanded.
            return raw.to_string();
        }

        let rest = rest.trim_start_matches(|c| self.is_separator(c));
        if rest.is_empty() {
            return home.to_string_lossy().into_owned();
        }

        home.join(rest).to_string_lossy().into_owned()
    }

    /// Remove a trailing separator-plus-`*` marker, if present.
    fn strip_wildcard(&self, path: String) -> (String, bool) {
        let Some(stripped) = self.wildcard_prefix(&path) else {
            return (path, false);
        };

        let mut stripped = stripped.to_string();
        // `/*` and `D:/*` must keep the separator that makes them a root.
        if stripped.is_empty() || (self.platform.drive_letters && is_bare_drive(&stripped)) {
            stripped.push('/');
        }

        (stripped, true)
    }

    fn wildcard_prefix<'a>(&self, path: &'a str) -> Option<&'a str> {
        let prefix = path.strip_suffix('*')?;
        let last = prefix.chars().next_back()?;
        self.is_separator(last)
            .then(|| &prefix[..prefix.len() - last.len_utf8()])
    }

    const fn is_separator(&self, c: char) -> bool {
        c == '/' || (self.platform.drive_letters && c == '\\')
    }
}

/// Rewrite `/d/rest` to `D:/rest`, leaving every other path untouched.
fn rewrite_drive_letter(path: &str) -> String {
    let mut chars = path.chars();

    if chars.next() != Some('/') {
        return path.to_string();
    }
    let Some(letter) = chars.next().filter(char::is_ascii_alphabetic) else {
        return path.to_string();
    };

    let rest = chars.as_str();
    let drive = letter.to_ascii_uppercase();

    if rest.is_empty() {
        format!("{drive}:/")
    } else if rest.starts_with('/') || rest.starts_with('\\') {
        format!("{drive}:{rest}")
    } else {
        path.to_string()
    }
}

fn is_bare_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
