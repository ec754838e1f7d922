//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. It provides structured access
//! to user input and handles argument conflicts and defaults.
//!
//! Helper methods on [`ListArgs`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use project_finder::{
    config::{DiscoverOptions, FileConfig, Platform},
    favorites::Favorites,
};

/// Arguments for listing discovered projects.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Roots to search instead of the configured `project_folders`
    ///
    /// A root ending in `/*` lists its immediate subdirectories; any other
    /// root is itself a single project. `~` is expanded to the home directory.
    #[arg(num_args = 0..)]
    roots: Vec<String>,

    /// Only keep wildcard children that contain a project indicator
    ///
    /// Directly named roots are always kept.
    #[arg(short = 'r', long)]
    require_indicator: bool,

    /// Project indicator to look for (replaces the configured list)
    ///
    /// Can be specified multiple times.
    #[arg(long = "indicator", action = clap::ArgAction::Append)]
    indicators: Vec<String>,

    /// Additional directory name to ignore
    ///
    /// Added on top of the configured or built-in ignore list. Can be
    /// specified multiple times.
    #[arg(long, action = clap::ArgAction::Append)]
    ignore: Vec<String>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, icons) is suppressed
    /// and a single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered projects (the default when no subcommand is given)
    List(ListArgs),

    /// Report the technology of one or more directories
    Classify {
        /// Directories to classify
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,

        /// Also print the priority and the entry that decided the result
        #[arg(short = 'e', long)]
        explain: bool,
    },

    /// Manage favorite projects
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommand,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `favorite`.
#[derive(Subcommand, Debug)]
pub enum FavoriteCommand {
    /// Mark a project as a favorite
    Add { path: PathBuf },
    /// Unmark a project
    Remove { path: PathBuf },
    /// Flip the favorite flag of a project
    Toggle { path: PathBuf },
    /// Print all favorite paths
    List,
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Without a subcommand the top-level arguments behave like `list`.
#[derive(Parser, Debug)]
#[command(name = "project-finder")]
#[command(about = "Find project directories and show what each one is built with")]
#[command(version)]
#[command(author)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand (e.g. `classify`, `favorite`, `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Listing options used when no subcommand is given
    #[command(flatten)]
    pub list: ListArgs,

    /// Log discovery decisions to stderr
    ///
    /// Equivalent to `RUST_LOG=project_finder=debug`. An explicit `RUST_LOG`
    /// takes precedence.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

impl ListArgs {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the roots to search.
    ///
    /// Priority: CLI arguments > config file `project_folders` > nothing.
    #[must_use]
    pub fn roots(&self, config: &FileConfig) -> Vec<String> {
        if self.roots.is_empty() {
            config.project_folders().to_vec()
        } else {
            self.roots.clone()
        }
    }

    /// Build discovery options from CLI args and config file.
    ///
    /// - **`require_indicator`**: CLI flag `||` config value `||` `false`
    /// - **indicators**: CLI list if non-empty > config > built-in defaults
    /// - **ignore**: config/built-in set, extended with `--ignore` names
    #[must_use]
    pub fn discover_options(
        &self,
        config: &FileConfig,
        platform: Platform,
        favorites: Favorites,
    ) -> DiscoverOptions {
        let mut options = config.discover_options(platform, favorites);

        options.require_indicator |= self.require_indicator;
        if !self.indicators.is_empty() {
            options.indicators.clone_from(&self.indicators);
        }
        options.ignore.extend(&self.ignore);

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_args(argv: &[&str]) -> ListArgs {
        let cli = Cli::parse_from(argv);
        match cli.subcommand {
            Some(Commands::List(list)) => list,
            None => cli.list,
            Some(other) => panic!("unexpected subcommand {other:?}"),
        }
    }

    #[test]
    fn test_default_values() {
        let args = list_args(&["project-finder"]);
        let config = FileConfig::default();

        assert!(args.roots(&config).is_empty());
        assert!(!args.json());

        let options = args.discover_options(&config, Platform::posix(), Favorites::default());
        assert!(!options.require_indicator);
        assert_eq!(options.indicators, DiscoverOptions::new(Platform::posix()).indicators);
        assert!(options.ignore.should_ignore("node_modules"));
    }

    #[test]
    fn test_roots_from_cli() {
        let args = list_args(&["project-finder", "~/code/*", "/srv/app"]);
        assert_eq!(
            args.roots(&FileConfig::default()),
            vec!["~/code/*".to_string(), "/srv/app".to_string()]
        );
    }

    #[test]
    fn test_list_subcommand_matches_default() {
        let implicit = list_args(&["project-finder", "--json", "/a/*"]);
        let explicit = list_args(&["project-finder", "list", "--json", "/a/*"]);

        assert_eq!(implicit.roots, explicit.roots);
        assert_eq!(implicit.json, explicit.json);
    }

    #[test]
    fn test_config_roots_used_when_cli_absent() {
        let args = list_args(&["project-finder"]);
        let config = FileConfig {
            project_folders: Some(vec!["/config/one/*".to_string(), "/config/two".to_string()]),
            ..FileConfig::default()
        };

        assert_eq!(
            args.roots(&config),
            vec!["/config/one/*".to_string(), "/config/two".to_string()]
        );
    }

    #[test]
    fn test_cli_roots_override_config() {
        let args = list_args(&["project-finder", "/cli"]);
        let config = FileConfig {
            project_folders: Some(vec!["/config".to_string()]),
            ..FileConfig::default()
        };

        assert_eq!(args.roots(&config), vec!["/cli".to_string()]);
    }

    #[test]
    fn test_require_indicator_from_config_or_flag() {
        let config = FileConfig {
            enable_project_indicators: Some(true),
            ..FileConfig::default()
        };
        let args = list_args(&["project-finder"]);
        assert!(
            args.discover_options(&config, Platform::posix(), Favorites::default())
                .require_indicator
        );

        let args = list_args(&["project-finder", "-r"]);
        assert!(
            args.discover_options(&FileConfig::default(), Platform::posix(), Favorites::default())
                .require_indicator
        );
    }

    #[test]
    fn test_indicators_replace_config() {
        let config = FileConfig {
            project_indicators: Some(vec![".git".to_string()]),
            ..FileConfig::default()
        };
        let args = list_args(&[
            "project-finder",
            "--indicator",
            "go.mod",
            "--indicator",
            "Cargo.toml",
        ]);
        let options = args.discover_options(&config, Platform::posix(), Favorites::default());

        assert_eq!(options.indicators, vec!["go.mod".to_string(), "Cargo.toml".to_string()]);
    }

    #[test]
    fn test_ignore_extends_config() {
        let config = FileConfig {
            ignored_folders: Some(vec!["tmp".to_string()]),
            ..FileConfig::default()
        };
        let args = list_args(&["project-finder", "--ignore", "archive"]);
        let options = args.discover_options(&config, Platform::posix(), Favorites::default());

        assert!(options.ignore.should_ignore("tmp"));
        assert!(options.ignore.should_ignore("archive"));
        assert!(!options.ignore.should_ignore("node_modules"));
    }

    #[test]
    fn test_classify_subcommand() {
        let cli = Cli::parse_from(["project-finder", "classify", "/a", "/b", "--explain"]);
        match cli.subcommand {
            Some(Commands::Classify { paths, explain }) => {
                assert_eq!(paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
                assert!(explain);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_classify_requires_path() {
        assert!(Cli::try_parse_from(["project-finder", "classify"]).is_err());
    }

    #[test]
    fn test_favorite_subcommands() {
        let cli = Cli::parse_from(["project-finder", "favorite", "toggle", "/p"]);
        assert!(matches!(
            cli.subcommand,
            Some(Commands::Favorite {
                command: FavoriteCommand::Toggle { ref path }
            }) if path == &PathBuf::from("/p")
        ));

        let cli = Cli::parse_from(["project-finder", "favorite", "list"]);
        assert!(matches!(
            cli.subcommand,
            Some(Commands::Favorite {
                command: FavoriteCommand::List
            })
        ));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["project-finder", "config", "path"]);
        assert!(matches!(
            cli.subcommand,
            Some(Commands::Config {
                command: ConfigCommand::Path
            })
        ));
    }

    #[test]
    fn test_verbose_is_global() {
        assert!(Cli::parse_from(["project-finder", "-v"]).verbose);
        assert!(Cli::parse_from(["project-finder", "classify", "/a", "--verbose"]).verbose);
    }
}
