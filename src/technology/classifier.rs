//! Rule evaluation against a directory listing.
//!
//! Only the top level of a directory is listed. Every rule is evaluated, the
//! matching ones are collected and the lowest priority number wins; equal
//! priorities resolve to the rule listed first in the table. I/O failures
//! never surface: a check that cannot be evaluated simply does not match.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::Path,
};

use tracing::{debug, trace};

use super::{
    Technology,
    rules::{RULES, TechnologyRule},
};

/// The check that made a rule match.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Evidence {
    /// A top-level entry with this exact name exists.
    File(&'static str),

    /// A top-level entry name ends with this suffix.
    Extension(&'static str),

    /// `file` exists and its text contains `needle`.
    Content {
        file: &'static str,
        needle: &'static str,
    },

    /// Every segment of this relative path exists.
    Subdirectory(&'static str),
}

/// The winning rule for a directory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Detection {
    pub technology: Technology,
    pub priority: u16,
    pub evidence: Evidence,
}

/// Classifies directories with an ordered rule table.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'r> {
    rules: &'r [TechnologyRule],
}

impl Default for Classifier<'static> {
    /// A classifier over the built-in [`RULES`].
    fn default() -> Self {
        Self { rules: RULES }
    }
}

impl<'r> Classifier<'r> {
    /// Create a classifier over a caller-supplied table.
    ///
    /// Table order is the tie-break order for rules of equal priority.
    #[must_use]
    pub const fn new(rules: &'r [TechnologyRule]) -> Self {
        Self { rules }
    }

    /// Best-matching technology for `dir`, or [`Technology::Unknown`].
    #[must_use]
    pub fn classify(&self, dir: &Path) -> Technology {
        self.detect(dir)
            .map_or(Technology::Unknown, |detection| detection.technology)
    }

    /// The winning rule and its evidence, or `None` when nothing matched or
    /// `dir` is not a readable directory.
    #[must_use]
    pub fn detect(&self, dir: &Path) -> Option<Detection> {
        let mut listing = Listing::read(dir)?;

        self.rules
            .iter()
            .filter(|rule| !rule.is_placeholder())
            .filter_map(|rule| {
                let evidence = listing.evaluate(rule)?;
                trace!(
                    path = %dir.display(),
                    technology = %rule.technology,
                    priority = rule.priority,
                    ?evidence,
                    "rule matched"
                );
                Some(Detection {
                    technology: rule.technology,
                    priority: rule.priority,
                    evidence,
                })
            })
            // `min_by_key` keeps the first of several equal minimums.
            .min_by_key(|detection| detection.priority)
    }
}

/// Classify `dir` with the built-in rules.
#[must_use]
pub fn classify(dir: &Path) -> Technology {
    Classifier::default().classify(dir)
}

/// Detect the winning built-in rule for `dir`.
#[must_use]
pub fn detect(dir: &Path) -> Option<Detection> {
    Classifier::default().detect(dir)
}

/// Top-level entries of one directory, with manifest contents read lazily
/// and shared across rules.
struct Listing<'a> {
    dir: &'a Path,
    entries: BTreeSet<String>,
    contents: HashMap<&'static str, Option<String>>,
}

impl<'a> Listing<'a> {
    fn read(dir: &'a Path) -> Option<Self> {
        if !dir.is_dir() {
            debug!(path = %dir.display(), "not a directory, skipping classification");
            return None;
        }

        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "cannot list directory");
                return None;
            }
        };

        let entries = read_dir
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        Some(Self {
            dir,
            entries,
            contents: HashMap::new(),
        })
    }

    fn evaluate(&mut self, rule: &TechnologyRule) -> Option<Evidence> {
        self.match_file(rule)
            .or_else(|| self.match_extension(rule))
            .or_else(|| self.match_content(rule))
            .or_else(|| self.match_subdirectory(rule))
    }

    fn match_file(&self, rule: &TechnologyRule) -> Option<Evidence> {
        rule.files
            .iter()
            .copied()
            .find(|name| self.entries.contains(*name))
            .map(Evidence::File)
    }

    fn match_extension(&self, rule: &TechnologyRule) -> Option<Evidence> {
        rule.extensions
            .iter()
            .copied()
            .find(|ext| self.entries.iter().any(|entry| entry.ends_with(ext)))
            .map(Evidence::Extension)
    }

    fn match_content(&mut self, rule: &TechnologyRule) -> Option<Evidence> {
        rule.contents.iter().find_map(|check| {
            let text = self.text_of(check.file)?;
            text.contains(check.needle).then_some(Evidence::Content {
                file: check.file,
                needle: check.needle,
            })
        })
    }

    fn match_subdirectory(&self, rule: &TechnologyRule) -> Option<Evidence> {
        rule.subdirectories
            .iter()
            .copied()
            .find(|relative| self.relative_path_exists(relative))
            .map(Evidence::Subdirectory)
    }

    /// Contents of a top-level file, or `None` when it is absent or unreadable.
    fn text_of(&mut self, file: &'static str) -> Option<&str> {
        if !self.entries.contains(file) {
            return None;
        }

        let dir = self.dir;
        self.contents
            .entry(file)
            .or_insert_with(|| {
                let path = dir.join(file);
                // FIFOs and devices would block or never end.
                if !fs::metadata(&path).is_ok_and(|m| m.is_file()) {
                    debug!(path = %path.display(), "not a regular file, skipping content check");
                    return None;
                }
                fs::read_to_string(&path)
                    .inspect_err(|e| {
                        debug!(path = %path.display(), error = %e, "skipping unreadable file");
                    })
                    .ok()
            })
            .as_deref()
    }

    /// Join the segments of `relative` one at a time, requiring each to exist.
    fn relative_path_exists(&self, relative: &str) -> bool {
        let mut current = self.dir.to_path_buf();

        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .all(|segment| {
                current.push(segment);
                current.exists()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technology::rules::content;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Helper to create a file with content, ensuring parent dirs exist.
    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_nonexistent_path_is_unknown() {
        let path = PathBuf::from("/definitely/not/a/real/path/for/project-finder");
        assert_eq!(classify(&path), Technology::Unknown);
        assert!(detect(&path).is_none());
    }

    #[test]
    fn test_file_path_is_unknown() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("Cargo.toml");
        create_file(&file, "[package]");

        assert_eq!(classify(&file), Technology::Unknown);
    }

    #[test]
    fn test_empty_directory_is_unknown() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(classify(tmp.path()), Technology::Unknown);
    }

    #[test]
    fn test_unmatched_directory_is_unknown() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("notes.txt"), "hello");
        create_file(&tmp.path().join("photo.jpeg"), "");

        assert_eq!(classify(tmp.path()), Technology::Unknown);
    }

    #[test]
    fn test_rust_by_manifest() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("Cargo.toml"), "[package]\nname = \"x\"");

        let detection = detect(tmp.path()).unwrap();
        assert_eq!(detection.technology, Technology::Rust);
        assert_eq!(detection.evidence, Evidence::File("Cargo.toml"));
    }

    #[test]
    fn test_go_by_extension() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("main.go"), "package main");

        let detection = detect(tmp.path()).unwrap();
        assert_eq!(detection.technology, Technology::Go);
        assert_eq!(detection.evidence, Evidence::Extension(".go"));
    }

    #[test]
    fn test_laravel_outranks_php_and_react() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        create_file(&base.join("artisan"), "#!/usr/bin/env php");
        create_file(&base.join("index.php"), "<?php");
        create_file(
            &base.join("package.json"),
            r#"{"dependencies": {"react": "^18.0.0"}}"#,
        );

        assert_eq!(classify(base), Technology::Laravel);
    }

    #[test]
    fn test_react_by_package_json_content() {
        let tmp = TempDir::new().unwrap();
        create_file(
            &tmp.path().join("package.json"),
            r#"{"name": "web", "dependencies": {"react": "^18.0.0", "react-dom": "^18.0.0"}}"#,
        );
        create_file(&tmp.path().join("tsconfig.json"), "{}");

        let detection = detect(tmp.path()).unwrap();
        assert_eq!(detection.technology, Technology::React);
        assert_eq!(
            detection.evidence,
            Evidence::Content {
                file: "package.json",
                needle: "\"react\""
            }
        );
    }

    #[test]
    fn test_typescript_beats_javascript() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("package.json"), r#"{"name": "lib"}"#);
        create_file(&tmp.path().join("tsconfig.json"), "{}");

        assert_eq!(classify(tmp.path()), Technology::TypeScript);
    }

    #[test]
    fn test_plain_package_json_is_javascript() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("package.json"), r#"{"name": "lib"}"#);

        assert_eq!(classify(tmp.path()), Technology::JavaScript);
    }

    #[test]
    fn test_manifest_outranks_loose_sources() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("Cargo.toml"), "[package]");
        create_file(&tmp.path().join("vite.config.ts"), "export default {}");
        create_file(&tmp.path().join("build.py"), "print()");

        assert_eq!(classify(tmp.path()), Technology::Rust);
    }

    #[test]
    fn test_language_outranks_docker_and_git() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("go.mod"), "module x");
        create_file(&tmp.path().join("Dockerfile"), "FROM scratch");
        fs::create_dir(tmp.path().join(".git")).unwrap();

        assert_eq!(classify(tmp.path()), Technology::Go);
    }

    #[test]
    fn test_docker_outranks_git() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("Dockerfile"), "FROM scratch");
        fs::create_dir(tmp.path().join(".git")).unwrap();

        assert_eq!(classify(tmp.path()), Technology::Docker);
    }

    #[test]
    fn test_git_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();

        assert_eq!(classify(tmp.path()), Technology::Git);
    }

    #[test]
    fn test_symfony_by_subdirectory_path() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("bin/console"), "#!/usr/bin/env php");
        create_file(&tmp.path().join("composer.json"), "{}");

        let detection = detect(tmp.path()).unwrap();
        assert_eq!(detection.technology, Technology::Symfony);
        assert_eq!(detection.evidence, Evidence::Subdirectory("bin/console"));
    }

    #[test]
    fn test_partial_subdirectory_path_does_not_match() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("wp-content/plugins")).unwrap();

        assert_eq!(classify(tmp.path()), Technology::Unknown);

        fs::create_dir_all(tmp.path().join("wp-content/themes")).unwrap();
        assert_eq!(classify(tmp.path()), Technology::WordPress);
    }

    #[test]
    fn test_django_by_requirements_content() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("requirements.txt"), "Django==5.0\ncelery\n");

        assert_eq!(classify(tmp.path()), Technology::Django);
    }

    #[test]
    fn test_content_check_requires_file_at_top_level() {
        let tmp = TempDir::new().unwrap();
        create_file(
            &tmp.path().join("nested/package.json"),
            r#"{"dependencies": {"react": "1"}}"#,
        );

        assert_eq!(classify(tmp.path()), Technology::Unknown);
    }

    #[test]
    fn test_undecodable_manifest_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("composer.json"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        create_file(&tmp.path().join("index.php"), "<?php");

        // The content checks on composer.json cannot run; the PHP rule still matches.
        assert_eq!(classify(tmp.path()), Technology::Php);
    }

    #[test]
    fn test_directory_named_like_manifest_is_not_readable_content() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("package.json")).unwrap();

        // Presence still counts as a file check; its content is never read.
        assert_eq!(classify(tmp.path()), Technology::JavaScript);
    }

    #[test]
    fn test_only_top_level_is_inspected() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("src/main.rs"), "fn main() {}");

        assert_eq!(classify(tmp.path()), Technology::Unknown);
    }

    #[test]
    fn test_equal_priority_resolves_by_table_order() {
        static GO_FIRST: &[TechnologyRule] = &[
            TechnologyRule::new(Technology::Go, 5).files(&["shared.marker"]),
            TechnologyRule::new(Technology::Rust, 5).files(&["shared.marker"]),
        ];
        static RUST_FIRST: &[TechnologyRule] = &[
            TechnologyRule::new(Technology::Rust, 5).files(&["shared.marker"]),
            TechnologyRule::new(Technology::Go, 5).files(&["shared.marker"]),
        ];

        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("shared.marker"), "");

        assert_eq!(Classifier::new(GO_FIRST).classify(tmp.path()), Technology::Go);
        assert_eq!(
            Classifier::new(RUST_FIRST).classify(tmp.path()),
            Technology::Rust
        );
    }

    #[test]
    fn test_lower_priority_number_wins_regardless_of_order() {
        static RULES_UNDER_TEST: &[TechnologyRule] = &[
            TechnologyRule::new(Technology::Php, 100).extensions(&[".php"]),
            TechnologyRule::new(Technology::Laravel, 10).files(&["artisan"]),
        ];

        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("artisan"), "");
        create_file(&tmp.path().join("index.php"), "");

        assert_eq!(
            Classifier::new(RULES_UNDER_TEST).classify(tmp.path()),
            Technology::Laravel
        );
    }

    #[test]
    fn test_placeholder_rule_is_never_evaluated() {
        static RULES_UNDER_TEST: &[TechnologyRule] =
            &[TechnologyRule::new(Technology::Unknown, 0).files(&["anything"])];

        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("anything"), "");

        assert!(Classifier::new(RULES_UNDER_TEST).detect(tmp.path()).is_none());
    }

    #[test]
    fn test_content_is_read_once_for_several_checks() {
        static RULES_UNDER_TEST: &[TechnologyRule] = &[
            TechnologyRule::new(Technology::Vue, 20)
                .contents(&[content("package.json", "\"vue\"")]),
            TechnologyRule::new(Technology::React, 20)
                .contents(&[content("package.json", "\"react\"")]),
        ];

        let tmp = TempDir::new().unwrap();
        create_file(
            &tmp.path().join("package.json"),
            r#"{"dependencies": {"react": "1"}}"#,
        );

        let mut listing = Listing::read(tmp.path()).unwrap();
        assert!(listing.evaluate(&RULES_UNDER_TEST[0]).is_none());
        assert!(listing.evaluate(&RULES_UNDER_TEST[1]).is_some());
        assert_eq!(listing.contents.len(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_fifo_named_like_manifest_does_not_block() {
        use std::{process::Command, sync::mpsc, thread, time::Duration};

        let tmp = TempDir::new().unwrap();
        let fifo = tmp.path().join("package.json");
        let created = Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .is_ok_and(|status| status.success());
        if !created {
            return;
        }

        let dir = tmp.path().to_path_buf();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(classify(&dir));
        });

        let technology = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("classification blocked on a FIFO");
        assert_eq!(technology, Technology::JavaScript);
    }
}
