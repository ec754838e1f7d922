//! Static technology detection rules.
//!
//! The table is an ordered slice, not a map: when two matching rules share a
//! priority, the one listed first wins. Priorities fall into three bands:
//!
//! | Band        | Range              | Examples                          |
//! |-------------|--------------------|-----------------------------------|
//! | Frameworks  | `1..=99`           | Laravel, Django, React, Flutter   |
//! | Languages   | `100..=199`        | TypeScript, Python, Rust, C       |
//! | Tooling     | `200..=299`        | Docker, Git                       |
//! | Fallback    | [`UNKNOWN_PRIORITY`] | Unknown (never evaluated)       |
//!
//! Within the framework band, server-side frameworks (identified by bootstrap
//! scripts or framework layouts) sit below front-end frameworks, which are
//! often pulled into a backend project through `package.json`.

use super::Technology;

/// Priority of the terminal `Unknown` placeholder.
pub const UNKNOWN_PRIORITY: u16 = u16::MAX;

/// A `(file, substring)` pair: the rule matches when `file` is present at
/// the top level and its text contains `needle`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContentCheck {
    pub file: &'static str,
    pub needle: &'static str,
}

/// Detection criteria for one technology.
///
/// A rule matches when any single check succeeds. Checks are evaluated in
/// field order: files, extensions, content, subdirectories.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TechnologyRule {
    pub technology: Technology,

    /// Lower value takes precedence.
    pub priority: u16,

    /// Literal entry names (files or directories) at the top level.
    pub files: &'static [&'static str],

    /// Suffixes matched against top-level entry names.
    pub extensions: &'static [&'static str],

    pub contents: &'static [ContentCheck],

    /// `/`-separated relative paths; every segment must exist.
    pub subdirectories: &'static [&'static str],
}

impl TechnologyRule {
    /// A rule with no checks; add them with the builder methods.
    #[must_use]
    pub const fn new(technology: Technology, priority: u16) -> Self {
        Self {
            technology,
            priority,
            files: &[],
            extensions: &[],
            contents: &[],
            subdirectories: &[],
        }
    }

    #[must_use]
    pub const fn files(mut self, files: &'static [&'static str]) -> Self {
        self.files = files;
        self
    }

    #[must_use]
    pub const fn extensions(mut self, extensions: &'static [&'static str]) -> Self {
        self.extensions = extensions;
        self
    }

    #[must_use]
    pub const fn contents(mut self, contents: &'static [ContentCheck]) -> Self {
        self.contents = contents;
        self
    }

    #[must_use]
    pub const fn subdirectories(mut self, subdirectories: &'static [&'static str]) -> Self {
        self.subdirectories = subdirectories;
        self
    }

    /// Whether this is the fallback entry, which is never evaluated.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.technology, Technology::Unknown)
    }
}

/// Shorthand for a [`ContentCheck`].
#[must_use]
pub const fn content(file: &'static str, needle: &'static str) -> ContentCheck {
    ContentCheck { file, needle }
}

const SERVER_FRAMEWORK: u16 = 10;
const FRONTEND_FRAMEWORK: u16 = 20;
const MOBILE_FRAMEWORK: u16 = 30;
const MANIFEST_LANGUAGE: u16 = 100;
const SCRIPT_LANGUAGE: u16 = 120;
const HEADER_LANGUAGE: u16 = 150;
const CONTAINER_TOOLING: u16 = 200;
const VCS_TOOLING: u16 = 250;

/// The built-in rule table, in tie-break order.
pub static RULES: &[TechnologyRule] = &[
    // Frameworks
    TechnologyRule::new(Technology::Laravel, SERVER_FRAMEWORK)
        .files(&["artisan"])
        .contents(&[content("composer.json", "laravel/framework")]),
    TechnologyRule::new(Technology::Symfony, SERVER_FRAMEWORK)
        .files(&["symfony.lock"])
        .contents(&[content("composer.json", "symfony/framework-bundle")])
        .subdirectories(&["bin/console", "config/bundles.php"]),
    TechnologyRule::new(Technology::Yii, SERVER_FRAMEWORK)
        .files(&["yii"])
        .contents(&[content("composer.json", "yiisoft/yii2")]),
    TechnologyRule::new(Technology::Zend, SERVER_FRAMEWORK)
        .contents(&[
            content("composer.json", "zendframework/"),
            content("composer.json", "laminas/laminas-mvc"),
        ])
        .subdirectories(&["config/application.config.php"]),
    TechnologyRule::new(Technology::WordPress, SERVER_FRAMEWORK)
        .files(&["wp-config.php", "wp-config-sample.php", "wp-login.php"])
        .subdirectories(&["wp-content/themes", "wp-includes"]),
    TechnologyRule::new(Technology::Django, SERVER_FRAMEWORK)
        .files(&["manage.py"])
        .contents(&[
            content("requirements.txt", "Django"),
            content("requirements.txt", "django"),
            content("pyproject.toml", "django"),
            content("Pipfile", "django"),
        ]),
    TechnologyRule::new(Technology::Angular, FRONTEND_FRAMEWORK)
        .files(&["angular.json", ".angular-cli.json"])
        .contents(&[content("package.json", "\"@angular/core\"")]),
    TechnologyRule::new(Technology::Vue, FRONTEND_FRAMEWORK)
        .files(&["vue.config.js"])
        .extensions(&[".vue"])
        .contents(&[content("package.json", "\"vue\"")]),
    TechnologyRule::new(Technology::React, FRONTEND_FRAMEWORK)
        .extensions(&[".jsx"])
        .contents(&[
            content("package.json", "\"react\""),
            content("package.json", "\"react-dom\""),
        ]),
    TechnologyRule::new(Technology::Flutter, MOBILE_FRAMEWORK)
        .files(&["pubspec.yaml"])
        .extensions(&[".dart"]),
    // Languages with a manifest
    TechnologyRule::new(Technology::TypeScript, MANIFEST_LANGUAGE).files(&["tsconfig.json"]),
    TechnologyRule::new(Technology::Node, MANIFEST_LANGUAGE)
        .files(&[".nvmrc", ".node-version", "npm-debug.log"]),
    TechnologyRule::new(Technology::JavaScript, MANIFEST_LANGUAGE)
        .files(&["package.json", "webpack.config.js", ".eslintrc", "yarn.lock"]),
    TechnologyRule::new(Technology::Rust, MANIFEST_LANGUAGE)
        .files(&["Cargo.toml", "Cargo.lock"])
        .extensions(&[".rs"]),
    TechnologyRule::new(Technology::Go, MANIFEST_LANGUAGE)
        .files(&["go.mod", "go.sum"])
        .extensions(&[".go"]),
    TechnologyRule::new(Technology::Java, MANIFEST_LANGUAGE)
        .files(&["pom.xml", "build.gradle", "gradle.properties"])
        .extensions(&[".java", ".jar"]),
    TechnologyRule::new(Technology::Kotlin, MANIFEST_LANGUAGE)
        .files(&["build.gradle.kts", "settings.gradle.kts"])
        .extensions(&[".kt", ".kts"]),
    TechnologyRule::new(Technology::CSharp, MANIFEST_LANGUAGE)
        .extensions(&[".csproj", ".sln", ".cs"]),
    TechnologyRule::new(Technology::Swift, MANIFEST_LANGUAGE)
        .files(&["Package.swift"])
        .extensions(&[".swift", ".xcodeproj", ".xcworkspace"]),
    TechnologyRule::new(Technology::Php, MANIFEST_LANGUAGE)
        .files(&["composer.json"])
        .extensions(&[".php"]),
    TechnologyRule::new(Technology::Ruby, MANIFEST_LANGUAGE)
        .files(&["Gemfile", "Rakefile"])
        .extensions(&[".rb", ".gemspec"]),
    TechnologyRule::new(Technology::Python, MANIFEST_LANGUAGE)
        .files(&[
            "requirements.txt",
            "setup.py",
            "pyproject.toml",
            "Pipfile",
            "venv",
            ".venv",
        ]),
    TechnologyRule::new(Technology::CPlusPlus, MANIFEST_LANGUAGE)
        .files(&["CMakeLists.txt"])
        .extensions(&[".cpp", ".cc", ".cxx", ".hpp"]),
    // Languages detected from loose sources only
    TechnologyRule::new(Technology::TypeScript, SCRIPT_LANGUAGE).extensions(&[".ts", ".tsx"]),
    TechnologyRule::new(Technology::JavaScript, SCRIPT_LANGUAGE)
        .extensions(&[".js", ".mjs", ".cjs"]),
    TechnologyRule::new(Technology::Python, SCRIPT_LANGUAGE).extensions(&[".py"]),
    TechnologyRule::new(Technology::C, HEADER_LANGUAGE).extensions(&[".c", ".h"]),
    // Tooling
    TechnologyRule::new(Technology::Docker, CONTAINER_TOOLING)
        .files(&[
            "Dockerfile",
            "docker-compose.yml",
            "docker-compose.yaml",
            "compose.yml",
            "compose.yaml",
        ]),
    TechnologyRule::new(Technology::Git, VCS_TOOLING).files(&[".git"]),
    TechnologyRule::new(Technology::Unknown, UNKNOWN_PRIORITY),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities_within_bands() {
        for rule in RULES {
            let band_ok = match rule.technology {
                Technology::Laravel
                | Technology::Symfony
                | Technology::Yii
                | Technology::Zend
                | Technology::WordPress
                | Technology::Django
                | Technology::Angular
                | Technology::Vue
                | Technology::React
                | Technology::Flutter => (1..=99).contains(&rule.priority),
                Technology::Docker | Technology::Git => (200..=299).contains(&rule.priority),
                Technology::Unknown => rule.priority == UNKNOWN_PRIORITY,
                _ => (100..=199).contains(&rule.priority),
            };
            assert!(band_ok, "{:?} has priority {}", rule.technology, rule.priority);
        }
    }

    #[test]
    fn test_unknown_is_last_and_empty() {
        let last = RULES.last().unwrap();
        assert!(last.is_placeholder());
        assert!(last.files.is_empty());
        assert!(last.extensions.is_empty());
        assert!(last.contents.is_empty());
        assert!(last.subdirectories.is_empty());
        assert_eq!(RULES.iter().filter(|r| r.is_placeholder()).count(), 1);
    }

    #[test]
    fn test_every_rule_has_a_check() {
        for rule in RULES.iter().filter(|r| !r.is_placeholder()) {
            let checks = rule.files.len()
                + rule.extensions.len()
                + rule.contents.len()
                + rule.subdirectories.len();
            assert!(checks > 0, "{:?} can never match", rule.technology);
        }
    }

    #[test]
    fn test_every_technology_has_a_rule() {
        for tech in Technology::ALL {
            assert!(
                RULES.iter().any(|r| r.technology == tech),
                "{tech:?} has no rule"
            );
        }
    }

    #[test]
    fn test_extensions_start_with_dot() {
        for rule in RULES {
            for ext in rule.extensions {
                assert!(ext.starts_with('.'), "{ext} in {:?}", rule.technology);
            }
        }
    }

    #[test]
    fn test_laravel_outranks_react_and_php() {
        let priority = |tech| {
            RULES
                .iter()
                .filter(|r| r.technology == tech)
                .map(|r| r.priority)
                .min()
                .unwrap()
        };
        assert!(priority(Technology::Laravel) < priority(Technology::React));
        assert!(priority(Technology::Laravel) < priority(Technology::Php));
    }
}
